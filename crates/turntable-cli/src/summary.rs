use console::Style;
use turntable_core::color::ColorOption;
use turntable_core::config::ViewerConfig;
use turntable_core::probe::ProbeMode;
use turntable_core::source::normalize_product_id;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    mode: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            mode: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_product_summary(config: &ViewerConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(&config.product_id));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}".repeat(config.product_id.chars().count().max(8)))
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Asset dir"),
        s.value.apply_to(normalize_product_id(&config.product_id))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Base URL"),
        s.path.apply_to(&config.base_url)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(config.total_frames)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Concurrency"),
        s.value.apply_to(config.max_concurrent_loads)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Drag"),
        s.value
            .apply_to(format!("{} frames/px", config.drag_sensitivity))
    );
    println!();

    println!("  {}", s.header.apply_to("Colors"));
    for (i, color) in config.colors.iter().enumerate() {
        print_color(&s, config, color, i == 0);
    }
    println!();
}

fn print_color(s: &Styles, config: &ViewerConfig, color: &ColorOption, is_default: bool) {
    let mode = ProbeMode::for_color(color, config.total_frames);
    let mode_text = match mode {
        ProbeMode::Explicit(ref frames) => format!("{mode} {frames:?}"),
        ProbeMode::AutoDetect { .. } => mode.to_string(),
    };

    println!(
        "    {:<12}{} {}{}",
        s.label.apply_to(&color.id),
        s.value.apply_to(&color.name),
        s.label.apply_to(&color.hex),
        if is_default {
            format!(" {}", s.disabled.apply_to("(default)"))
        } else {
            String::new()
        }
    );
    println!("    {:<12}{}", "", s.mode.apply_to(mode_text));
    if let Some(ref bg) = color.background {
        println!("    {:<12}{} {}", "", s.label.apply_to("backdrop"), bg);
    }
}
