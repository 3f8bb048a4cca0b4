pub mod force_model;
pub mod kinematics;
pub mod trajectory;
