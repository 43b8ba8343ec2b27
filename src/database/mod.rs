pub mod introspect;
pub mod partial_update;
pub mod pool;
pub mod rows;
