pub mod column_name;
pub use column_name::*;

pub mod math;
pub use math::*;

pub mod variable;
pub use variable::*;

pub mod constant;
pub use constant::*;

pub mod nested;
pub use nested::*;

pub mod function_call;
pub use function_call::*;

pub mod unary;
pub use unary::*;

pub mod system_variable;
pub use system_variable::*;

pub mod interval;
pub use interval::*;
