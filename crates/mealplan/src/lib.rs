pub mod generator;
pub mod plan;
pub mod week;

pub use generator::{PlanGenerator, generate_weekly_plan};
pub use plan::{DayPlan, WeeklyPlan};
pub use week::{MEAL_SLOTS, Weekday};
