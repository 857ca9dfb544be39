pub mod bundle;
pub mod icon;
