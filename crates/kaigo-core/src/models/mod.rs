pub mod assessment;
pub mod care_plan;
pub mod category;
pub mod extraction;
