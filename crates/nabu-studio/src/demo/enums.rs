use nabu_inspect::prelude::*;
use nabu_ui::UiInput;

use super::{play, step};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Shading {
    #[default]
    Solid = 0,
    Wireframe = 1,
    Points = 2,
}

nabu_inspect::enumeration!(Shading { Solid, Wireframe, Points });

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Quality {
    Low = 0,
    #[default]
    Medium = 1,
    High = 2,
}

nabu_inspect::enumeration!(Quality { Low, Medium, High });

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Layers: u8 {
        const BASE = 1 << 0;
        const DETAIL = 1 << 1;
        const OVERLAY = 1 << 2;
        const DEBUG = 1 << 3;
    }
}

nabu_inspect::flags_enumeration!(Layers);

#[derive(Debug)]
pub struct Enums {
    pub shading: Shading,
    pub quality: Quality,
    pub layers: Layers,
}

pub(super) fn register(registry: &mut Registry) {
    registry.register(
        TypeInfo::<Enums>::new("Enums")
            .field("shading", |s| &s.shading, |s| &mut s.shading)
            .field_with("quality", |s| &s.quality, |s| &mut s.quality, |f| f.with(EnumRadioButton))
            .field_with("layers", |s| &s.layers, |s| &mut s.layers, |f| {
                f.with(EnumFlags).with(Tooltip::new("Any combination"))
            }),
    );
}

pub(super) fn run(registry: &Registry) -> anyhow::Result<()> {
    let mut obj = Enums { shading: Shading::default(), quality: Quality::default(), layers: Layers::BASE };
    play(registry, RenderOptions::default(), &mut obj, vec![
        step("pick from the dropdown", UiInput::new().select("shading/shading", 1)),
        step("pick a radio button", UiInput::new().click("quality/High")),
        step("toggle flags", UiInput::new().click("layers/layers/DETAIL").click("layers/layers/DEBUG")),
        step("clear flags", UiInput::new().click("layers/layers/<None>")),
    ])
}
