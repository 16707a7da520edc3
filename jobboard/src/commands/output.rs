//! Plain text rendering of query results.

use chrono::{DateTime, Utc};
use jobboard_models::{
    application::ApplicationRequest,
    job::{CatalogEntry, JobCategory},
    ranking::RankedJob,
};

pub(super) fn entry(entry: &CatalogEntry) {
    let job = &entry.job;
    let state = if job.active { "active" } else { "inactive" };
    println!("{}  {}  [{state}]", job.id, job.title);
    println!("    company:    {}", job.company_id);
    println!("    posted:     {}", date(job.posted_at));
    if let Some(closing_at) = job.closing_at {
        println!("    closes:     {}", date(closing_at));
    }
    if let Some(salary) = job.salary {
        println!("    salary:     {salary}");
    }
    println!("    openings:   {}", job.quantity);
    match entry.company_rating {
        Some(rating) => println!("    rating:     {rating:.1}"),
        None => println!("    rating:     -"),
    }
    if !entry.categories.is_empty() {
        println!("    categories: {}", category_names(&entry.categories));
    }
}

pub(super) fn ranked(ranked: &[RankedJob]) {
    if ranked.is_empty() {
        println!("No matching job postings.");
    }
    for job in ranked {
        println!(
            "{:>3}  {}  {}",
            job.score(),
            job.entry.job.id,
            job.entry.job.title
        );
    }
}

pub(super) fn categories(categories: &[JobCategory]) {
    if categories.is_empty() {
        println!("No categories.");
    }
    for category in categories {
        println!("{}  {}", category.id, category.name);
    }
}

pub(super) fn application(request: &ApplicationRequest) {
    println!(
        "{}  [{}]  job {}  seeker {}",
        request.id,
        request.status.as_str(),
        request.job_id,
        request.seeker_id
    );
    println!("    submitted:  {}", date(request.submitted_at));
    if let Some(cover_letter) = request.cover_letter.as_ref().filter(|c| !c.is_empty()) {
        println!("    letter:     {cover_letter}");
    }
    if let Some(responded_at) = request.responded_at {
        println!("    responded:  {}", date(responded_at));
    }
    if let Some(response) = request.response.as_ref().filter(|r| !r.is_empty()) {
        println!("    response:   {response}");
    }
}

pub(super) fn applications(requests: &[ApplicationRequest]) {
    if requests.is_empty() {
        println!("No applications.");
    }
    for request in requests {
        application(request);
    }
}

pub(super) fn date(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

fn category_names(categories: &[JobCategory]) -> String {
    categories
        .iter()
        .map(|category| category.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
