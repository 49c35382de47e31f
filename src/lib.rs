pub mod districts;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
