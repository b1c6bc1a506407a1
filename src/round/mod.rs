//! Rounds: orchestration, results, presentation, and simulation.
//!
//! - `RoundController`: plays one round per trigger
//! - `RoundResult`: what a round hands to the Presentation Layer
//! - `Presenter`: the Presentation Layer boundary
//! - `simulate`: many rounds at once, summarized

pub mod controller;
pub mod presenter;
pub mod result;
pub mod simulation;

pub use controller::{RoundController, RoundPhase};
pub use presenter::{card_image_url, LatestRound, LogPresenter, Presenter, DEFAULT_CARD_IMAGE_URL};
pub use result::{HandReport, RoundResult};
pub use simulation::{simulate, SimulationSummary};
