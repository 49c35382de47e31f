pub mod alerts;
pub mod heatmap;
pub mod mitigation;
pub mod report;
pub mod scoring;
pub mod seed;
