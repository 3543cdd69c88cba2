/// What to draw in the list header or footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    Empty,
    /// The caller's own header/footer component.
    ListComponent,
    /// The caller's custom loading indicator.
    CustomIndicator,
    /// The adapter's built-in loading indicator.
    DefaultIndicator,
}

/// Which optional presentation pieces the caller supplied for one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotComponents {
    pub custom_indicator: bool,
    pub list_component: bool,
}

impl SlotComponents {
    pub fn new(custom_indicator: bool, list_component: bool) -> Self {
        Self {
            custom_indicator,
            list_component,
        }
    }
}

/// Picks the slot content for an edge.
///
/// With default indicators disabled the slot belongs to the caller's list component; otherwise it
/// shows a loading indicator only while that edge is loading.
pub fn select_slot(show_default_indicators: bool, in_progress: bool, parts: SlotComponents) -> Slot {
    if !show_default_indicators {
        return if parts.list_component {
            Slot::ListComponent
        } else {
            Slot::Empty
        };
    }
    if !in_progress {
        return Slot::Empty;
    }
    if parts.custom_indicator {
        Slot::CustomIndicator
    } else {
        Slot::DefaultIndicator
    }
}
