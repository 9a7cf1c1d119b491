//! Value objects - immutable types that represent domain concepts

mod caller;
mod interaction_type;
mod lookup;

pub use caller::Caller;
pub use interaction_type::{InteractionKey, InteractionType, ParseInteractionTypeError};
pub use lookup::Lookup;
