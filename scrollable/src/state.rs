use crate::options::ScrollbarPlacement;
use crate::orientation::AxisPair;

/// Per-axis mirror of everything the engine has written to the host.
///
/// `None` means "never written". Write phases diff against this mirror, so
/// redundant geometry or scroll notifications emit no duplicate ops.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct AxisVisualState {
    pub viewport_size_var: Option<f32>,
    pub content_restricted: Option<bool>,
    pub scrollbar_visible: Option<bool>,
    pub reserved_space: Option<bool>,
    pub overflowing: Option<bool>,
    pub thumb_size: Option<f32>,
    pub thumb_offset: Option<f32>,
    pub at_start: Option<bool>,
    pub at_end: Option<bool>,
    pub drag_active: Option<bool>,
}

/// The engine-wide applied-writes mirror.
///
/// Option-derived statics start at their host defaults so attaching with
/// default options emits nothing for them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct VisualState {
    pub axes: AxisPair<AxisVisualState>,
    pub touch_active: Option<bool>,
    pub always_visible: Option<bool>,
    pub placement: AxisPair<Option<ScrollbarPlacement>>,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            axes: AxisPair::default(),
            touch_active: Some(false),
            always_visible: Some(false),
            placement: AxisPair::splat(Some(ScrollbarPlacement::End)),
        }
    }
}
