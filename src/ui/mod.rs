pub mod charts;
pub mod dashboard;
pub mod legend;
pub mod panels;
pub mod summary_table;
