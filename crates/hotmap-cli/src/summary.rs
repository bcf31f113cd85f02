use console::Style;
use hotmap_core::hotspot::HotspotCatalog;
use hotmap_core::sanitize::to_plain_text;
use hotmap_core::source::HotspotSource;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    id: Style,
    detail: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            id: Style::new().green(),
            detail: Style::new().cyan(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_catalog_summary(source: &HotspotSource, catalog: &HotspotCatalog) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Hotspot Data"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Source"), s.path.apply_to(source));
    println!("  {:<14}{}", s.label.apply_to("Hotspots"), s.value.apply_to(catalog.len()));
    let with_detail = catalog.records().iter().filter(|r| r.has_detail()).count();
    println!("  {:<14}{}", s.label.apply_to("With detail"), s.value.apply_to(with_detail));
    println!();

    if catalog.is_empty() {
        println!("  {}", s.disabled.apply_to("No hotspot data to display."));
        println!();
        return;
    }

    for record in catalog.records() {
        let detail = if record.has_detail() {
            s.detail.apply_to("detail")
        } else {
            s.disabled.apply_to("-")
        };
        println!(
            "  {:<16} {:>6.2}% {:>6.2}%  {:<7} {}",
            s.id.apply_to(&record.id),
            record.x_percent,
            record.y_percent,
            detail,
            to_plain_text(&record.location)
        );
    }
    println!();
}
