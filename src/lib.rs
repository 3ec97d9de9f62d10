//! Trade digitalisation benefit model.
//!
//! Given a lane's trade volumes, process costs and the company's accounts,
//! [`domain::compute_all_results`] prices two payment options against today's
//! terms: the discount they capture, the working capital they tie up or free,
//! and the process savings from digitalising the paperwork.

pub mod app;
pub mod cli;
pub mod domain;
pub mod util;
