//! scalar-core
//!
//! Pure client-side logic for the scalar market terminal:
//! - market snapshot model
//! - direction / leverage
//! - expiry countdown and the owned timers that drive it
//! - submission state + auto-clearing result banner
//! - leveraged (variant A) and scalar (variant B) order forms
//!
//! Nothing here touches the network or the terminal. Time is always
//! passed in explicitly so the UI loop and tests drive the same code.

pub mod direction;
pub mod leverage;
pub mod market;
pub mod schedule;
pub mod countdown;
pub mod outcome;
pub mod banner;
pub mod submission;
pub mod leveraged_form;
pub mod scalar_form;
pub mod error;

pub use direction::Direction;
pub use leverage::Leverage;
pub use market::{MarketSnapshot, PriceRange};
pub use schedule::{Interval, Timeout};
pub use countdown::{Countdown, Urgency};
pub use outcome::{CancelOutcome, OrderId, PlaceOutcome};
pub use banner::{OrderResult, ResultBanner};
pub use submission::{SubmitState, Submission};
pub use leveraged_form::{LeveragedForm, LeveragedOrder, LeveragedRequest};
pub use scalar_form::{ScalarForm, ScalarOrder};
pub use error::FormError;
