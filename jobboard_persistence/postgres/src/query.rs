use bb8_postgres::tokio_postgres::types::ToSql;
use jobboard_models::job::JobPredicate;
use uuid::Uuid;

type Param = Box<dyn ToSql + Sync + Send>;

/// Collects query parameters and hands out their `$n` placeholders.
#[derive(Default)]
pub(crate) struct QueryBuilder {
    params: Vec<Param>,
}

impl QueryBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter and returns its placeholder.
    pub(crate) fn bind(&mut self, value: impl ToSql + Sync + Send + 'static) -> String {
        self.params.push(Box::new(value));
        format!("${}", self.params.len())
    }

    pub(crate) fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|param| &**param as &(dyn ToSql + Sync))
            .collect()
    }

    /// Compiles a predicate over the `job_postings` table aliased as `j` into
    /// a boolean SQL expression.
    pub(crate) fn job_condition(&mut self, predicate: &JobPredicate) -> String {
        match predicate {
            JobPredicate::Any => "true".into(),
            JobPredicate::And(predicates) => self.join(predicates, "and", "true"),
            JobPredicate::Or(predicates) => self.join(predicates, "or", "false"),
            JobPredicate::Id(job_id) => format!("j.id={}", self.bind(**job_id)),
            JobPredicate::Active(active) => format!("j.active={}", self.bind(*active)),
            JobPredicate::OpenAt(now) => format!(
                "(j.active and (j.closing_at is null or j.closing_at>{}))",
                self.bind(*now)
            ),
            JobPredicate::NotAppliedBy(seeker_id) => format!(
                "not exists (select 1 from application_requests ar where ar.job_id=j.id and \
                 ar.seeker_id={})",
                self.bind(**seeker_id)
            ),
            JobPredicate::Company(company_id) => {
                format!("j.company_id={}", self.bind(**company_id))
            }
            JobPredicate::HasAnyCategory(category_ids) => format!(
                "exists (select 1 from job_posting_categories jpc where jpc.job_id=j.id and \
                 jpc.category_id=any({}))",
                self.bind(category_ids.iter().map(|id| **id).collect::<Vec<Uuid>>())
            ),
            JobPredicate::InAnyField(field_ids) => format!(
                "exists (select 1 from job_posting_categories jpc inner join job_categories jc \
                 on jc.id=jpc.category_id where jpc.job_id=j.id and jc.field_id=any({}))",
                self.bind(field_ids.iter().map(|id| **id).collect::<Vec<Uuid>>())
            ),
            JobPredicate::TitleContains(term) => format!(
                "strpos(lower(j.title), lower({}))>0",
                self.bind(term.clone().into_inner())
            ),
        }
    }

    fn join(&mut self, predicates: &[JobPredicate], op: &str, empty: &str) -> String {
        if predicates.is_empty() {
            return empty.into();
        }
        let parts = predicates
            .iter()
            .map(|predicate| self.job_condition(predicate))
            .collect::<Vec<_>>();
        format!("({})", parts.join(&format!(" {op} ")))
    }
}
