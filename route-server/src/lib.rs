//! Travel route search server.
//!
//! A web application that answers: "how can I get from this city to
//! that city?" by synthesizing candidate bus and carpool offers,
//! annotating each with the great-circle trip distance, and keeping a
//! category-filtered view with a highlighted offer for map display.

pub mod cities;
pub mod domain;
pub mod geo;
pub mod search;
pub mod web;
