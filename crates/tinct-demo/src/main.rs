use anyhow::Context;
use tinct_core::prelude::*;
use tinct_picker::*;

fn load_config() -> anyhow::Result<PickerConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(PickerConfig::default());
    };
    let json =
        std::fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
    PickerConfig::from_json(&json).with_context(|| format!("parsing config {path}"))
}

fn print_color(label: &str, picker: &ColorPicker) {
    let state = picker.state();
    println!("{label}");
    for channel in [Channel::Hex, Channel::Rgba, Channel::Hsv, Channel::Hsl] {
        let err = state
            .field_error(channel)
            .map(|e| format!("  ({e})"))
            .unwrap_or_default();
        println!("  {:>4}: {}{err}", channel.to_string(), state.field_text(channel));
    }
}

fn print_markers(picker: &ColorPicker) {
    let mapper = picker.mapper();
    let hsv = picker.color().hsv();
    let marker = mapper.canvas_marker(hsv);
    println!("  hue thumb at x={:.1}", mapper.hue_thumb_x(hsv.h));
    println!("  canvas marker at ({:.1}, {:.1})", marker.x, marker.y);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = load_config()?;
    let mut picker = ColorPicker::new(&config)?;
    picker.on_select(|value| println!("-> host received {value}"));

    print_color("seed", &picker);

    picker.pick_swatch(STANDARD_COLORS[2]);

    picker.select_section(Section::MoreColors);
    picker.edit_field(Channel::Rgba, &FieldEdit::Replace("255,128,0,0.8".into()))?;
    // an edit in progress is kept but not applied
    if let Err(err) = picker.edit_field(Channel::Hex, &FieldEdit::Replace("#12345".into())) {
        println!("rejected {} edit: {err}", err.channel());
    }
    print_color("after rgba edit", &picker);
    picker.edit_field(Channel::Hex, &FieldEdit::Insert("6".into()))?;

    // drag the hue thumb across a third of the bar
    let bar = config.hue_bar;
    let y = bar.y + bar.h * 0.5;
    picker.dispatch(PointerEvent::down(bar.x, y));
    picker.dispatch(PointerEvent::moved(bar.x + bar.w / 3.0, y));
    picker.dispatch(PointerEvent::up(bar.x + bar.w / 3.0, y));

    let canvas = config.canvas;
    picker.dispatch(PointerEvent::down(
        canvas.x + canvas.w * 0.75,
        canvas.y + canvas.h * 0.25,
    ));
    picker.set_alpha(0.5)?;
    print_color("after pointer picks", &picker);
    print_markers(&picker);
    picker.apply();

    picker.select_section(Section::Gradient);
    {
        let mut gradient = picker.gradient_mut();
        gradient.set_stop_color(0, picker.color().hex());
        gradient.add_stop();
        gradient.set_stop_color(2, Hex::from_u32(0x7030a0));
    }
    let track = picker.track();
    picker.drag_stop(1, Vec2::new(track.x + track.w * 0.2, track.y));
    picker.dispatch(PointerEvent::up(track.x + track.w * 0.2, track.y));
    // rotate around the canvas center, ending up at the bottom-right diagonal
    let center = canvas.center();
    picker.drag_angle(center, Vec2::new(center.x + 10.0, center.y - 10.0));
    picker.dispatch(PointerEvent::moved(center.x + 10.0, center.y + 10.0));
    picker.dispatch(PointerEvent::up(center.x + 10.0, center.y + 10.0));
    picker.apply();

    picker.select_section(Section::Palette);
    picker.pick_recent(2);

    println!("recent:");
    for value in picker.recent() {
        println!("  {value}");
    }
    log::info!("demo finished with {} recent colors", picker.recent().len());
    Ok(())
}
