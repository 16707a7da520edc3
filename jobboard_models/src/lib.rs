use macros::nutype_string;

pub mod account;
pub mod application;
pub mod company;
pub mod error;
pub mod job;
mod macros;
pub mod notification;
pub mod pagination;
pub mod ranking;

nutype_string!(SearchTerm(validate(len_char_min = 1, len_char_max = 256)));
