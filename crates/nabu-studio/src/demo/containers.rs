use std::collections::{BTreeMap, VecDeque};

use nabu_inspect::prelude::*;
use nabu_ui::UiInput;

use super::{play, step};

#[derive(Debug, Default)]
pub struct Inventory {
    pub items: Vec<String>,
    pub slots: [u8; 4],
    pub recent: VecDeque<i32>,
    pub prices: BTreeMap<String, f32>,
    pub next_id: u32,
}

pub(super) fn register(registry: &mut Registry) {
    registry.register(
        TypeInfo::<Inventory>::new("Inventory")
            .field_with("items", |s| &s.items, |s| &mut s.items, |f| {
                f.with(ContainerAddCallback::new(|s: &mut Inventory, item: &mut String| {
                    s.next_id += 1;
                    *item = format!("item {}", s.next_id);
                }))
            })
            .field("slots", |s| &s.slots, |s| &mut s.slots)
            .field("recent", |s| &s.recent, |s| &mut s.recent)
            .field("prices", |s| &s.prices, |s| &mut s.prices),
    );
}

pub(super) fn run(registry: &Registry) -> anyhow::Result<()> {
    let mut obj = Inventory {
        items: vec!["sword".into(), "shield".into()],
        prices: BTreeMap::from([("sword".to_string(), 10.0)]),
        ..Inventory::default()
    };
    play(registry, RenderOptions::default(), &mut obj, vec![
        step("append", UiInput::new().click("items/Add element")),
        step("remove the first item", UiInput::new().click("items/0/-")),
        step("insert before the second", UiInput::new().click("items/1/+")),
        step("edit a fixed slot", UiInput::new().set_scalar("slots/2/2", 5.0)),
        step("grow the deque", UiInput::new().click("recent/Add element")),
        step("rename a key", UiInput::new().set_text("prices/0/##key/##key", "axe")),
        step("edit a value", UiInput::new().set_scalar("prices/0/0/0", 12.5)),
        step("add a default entry", UiInput::new().click("prices/Add element")),
    ])
}
