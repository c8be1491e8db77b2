pub mod advisor;
pub mod crop_card;
pub mod page;
pub mod prediction_form;
pub mod results;
pub mod yield_chart;
