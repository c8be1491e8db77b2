//! Domain types and render pipeline shared by the crop advisor frontend and
//! its host binary.
//!
//! Nothing in here touches the DOM or the network directly: the frontend
//! supplies a [`PredictionApi`] and a [`ResultsView`], the host binary reuses
//! the request/response records for its API documentation.

pub mod chart;
pub mod endpoints;
pub mod error;
pub mod pipeline;
pub mod regions;
pub mod request;
pub mod response;
pub mod results;

pub use chart::LineChartSpec;
pub use error::ClientError;
pub use pipeline::{display_results, submit_prediction, PredictionApi, RenderOutcome, ResultsView};
pub use regions::{capitalize_first, region_options, RegionOption, REGIONS, SEASONS};
pub use request::{parse_float, PredictionForm, PredictionRequest, START_YEAR};
pub use response::{CropResult, HistoricalYieldSeries, PredictionResponse};
pub use results::{ChartSlot, CropBlock, ResultsAction, ResultsState};
