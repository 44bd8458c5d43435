pub mod assessment;
pub mod care_plan;
pub mod health;
