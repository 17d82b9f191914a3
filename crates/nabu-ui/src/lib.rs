//! Nabu UI: a headless [`WidgetBackend`](nabu_inspect::WidgetBackend).
//!
//! Instead of drawing, [`Ui`] records every widget submitted during a frame
//! into a [`Frame`] and feeds scripted [`UiInput`] to the widgets it
//! targets. Widgets are addressed by their id path: the segments pushed
//! with `push_id` followed by the widget's label, joined with `/`.
//!
//! ```rust,ignore
//! let mut ui = Ui::new();
//! let input = UiInput::new().set_scalar("volume/volume", 0.5);
//! let (changed, frame) = ui.run(input, |ui| renderer.render_type(ui, &mut settings));
//! assert!(frame.contains("volume/volume"));
//! ```

pub mod frame;
pub mod id;
pub mod input;
pub mod style;
pub mod text_edit;
pub mod ui;

pub use frame::{Frame, Node, NodeKind};
pub use id::WidgetId;
pub use input::{Action, EditKey, Interaction, UiInput};
pub use style::StyleSnapshot;
pub use text_edit::TextEditState;
pub use ui::{Ui, UiConfig};
