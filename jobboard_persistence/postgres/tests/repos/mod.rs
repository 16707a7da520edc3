mod application;
mod catalog;
mod notification;
mod preference;
