use jobboard_core_application_impl::ApplicationFeatureServiceImpl;
use jobboard_core_catalog_impl::{ownership::JobOwnershipServiceImpl, CatalogFeatureServiceImpl};
use jobboard_core_matching_impl::MatchingFeatureServiceImpl;
use jobboard_core_notification_impl::{
    notification::NotificationServiceImpl, NotificationFeatureServiceImpl,
};
use jobboard_persistence_postgres::{
    account::PostgresAccountRepository, application::PostgresApplicationRepository,
    catalog::PostgresCatalogRepository, company::PostgresCompanyRepository,
    notification::PostgresNotificationRepository, preference::PostgresPreferenceRepository,
    saved::PostgresSavedJobRepository, PostgresDatabase,
};
use jobboard_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

// Persistence
pub type Database = PostgresDatabase;

pub type AccountRepo = PostgresAccountRepository;
pub type ApplicationRepo = PostgresApplicationRepository;
pub type CatalogRepo = PostgresCatalogRepository;
pub type CompanyRepo = PostgresCompanyRepository;
pub type NotificationRepo = PostgresNotificationRepository;
pub type PreferenceRepo = PostgresPreferenceRepository;
pub type SavedJobRepo = PostgresSavedJobRepository;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Core
pub type JobOwnership = JobOwnershipServiceImpl<AccountRepo, CatalogRepo>;
pub type Notification = NotificationServiceImpl<Id, Time, NotificationRepo>;

pub type CatalogFeature = CatalogFeatureServiceImpl<
    Database,
    Id,
    Time,
    JobOwnership,
    Notification,
    AccountRepo,
    CatalogRepo,
    SavedJobRepo,
>;

pub type MatchingFeature =
    MatchingFeatureServiceImpl<Database, Time, AccountRepo, CatalogRepo, PreferenceRepo>;

pub type ApplicationFeature = ApplicationFeatureServiceImpl<
    Database,
    Id,
    Time,
    JobOwnership,
    Notification,
    AccountRepo,
    CatalogRepo,
    ApplicationRepo,
>;

pub type NotificationFeature = NotificationFeatureServiceImpl<
    Database,
    Notification,
    AccountRepo,
    CompanyRepo,
    NotificationRepo,
>;
