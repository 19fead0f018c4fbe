mod cohorts;
pub use cohorts::Cohorts;

mod funnels;
pub use funnels::Funnels;

mod overview;
pub use overview::Overview;

mod users;
pub use users::Users;
