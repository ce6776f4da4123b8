// crates/scalar-terminal/src/components/mod.rs

pub mod help;
pub mod market_info;
pub mod order_form;
pub mod status_bar;
