//! Closed sets of values reported by the backends.
//!
//! Each enum carries an explicit `Unspecified` member: it is what any value
//! the BFF does not recognise collapses to. They are `non_exhaustive` because
//! the backends add members before the BFF learns about them.

/// Outcome reported by a backend inside its response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ResponseStatus {
    #[default]
    Unspecified,
    Ok,
    Error,
}

impl ResponseStatus {
    pub const ALL: [ResponseStatus; 3] = [
        ResponseStatus::Unspecified,
        ResponseStatus::Ok,
        ResponseStatus::Error,
    ];

    pub fn is_ok(&self) -> bool {
        *self == ResponseStatus::Ok
    }
}

/// Unit of a rental-duration tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum UnitMeasurement {
    #[default]
    Unspecified,
    Hour,
    Day,
    Week,
    Month,
}

impl UnitMeasurement {
    pub const ALL: [UnitMeasurement; 5] = [
        UnitMeasurement::Unspecified,
        UnitMeasurement::Hour,
        UnitMeasurement::Day,
        UnitMeasurement::Week,
        UnitMeasurement::Month,
    ];
}

/// Progress of a physical locker opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum OpenStatus {
    #[default]
    Unspecified,
    Received,
    Requested,
    Executed,
    Error,
    Success,
}

impl OpenStatus {
    pub const ALL: [OpenStatus; 6] = [
        OpenStatus::Unspecified,
        OpenStatus::Received,
        OpenStatus::Requested,
        OpenStatus::Executed,
        OpenStatus::Error,
        OpenStatus::Success,
    ];

    /// `Executed` and `Success` both mean the door was actuated.
    pub fn is_opened(&self) -> bool {
        matches!(self, OpenStatus::Executed | OpenStatus::Success)
    }
}
