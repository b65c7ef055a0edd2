//! SVG bar-chart rendering for n-gram frequency comparisons.
//!
//! Each table gets its own horizontal bar panel; panels are laid out side by
//! side in one figure with the most frequent n-gram at the top.

use crate::text::NgramTable;

pub const FIGURE_WIDTH: f64 = 1800.0;
pub const FIGURE_HEIGHT: f64 = 700.0;

/// Bar fill per panel, cycled when there are more panels than colors.
const PANEL_COLORS: &[&str] = &["#87CEEB", "#F08080", "#90EE90", "#FFD700"];

const TITLE_HEIGHT: f64 = 60.0;
const AXIS_HEIGHT: f64 = 60.0;
const PANEL_PADDING: f64 = 20.0;
const LABEL_SHARE: f64 = 0.38;

pub fn panel_title(table: &NgramTable, top_n: usize) -> String {
    format!(
        "Top {} {}-gramas más frecuentes (min_df={})",
        top_n, table.n, table.min_df
    )
}

/// Render all tables into one SVG document.
pub fn render_comparison_svg(tables: &[NgramTable], top_n: usize) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
        w = FIGURE_WIDTH,
        h = FIGURE_HEIGHT
    ));
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
        FIGURE_WIDTH, FIGURE_HEIGHT
    ));

    if !tables.is_empty() {
        let panel_width = FIGURE_WIDTH / tables.len() as f64;
        for (i, table) in tables.iter().enumerate() {
            let color = PANEL_COLORS[i % PANEL_COLORS.len()];
            render_panel(&mut svg, table, top_n, i as f64 * panel_width, panel_width, color);
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn render_panel(
    svg: &mut String,
    table: &NgramTable,
    top_n: usize,
    x0: f64,
    width: f64,
    color: &str,
) {
    let label_width = width * LABEL_SHARE;
    let plot_x = x0 + PANEL_PADDING + label_width;
    let plot_y = TITLE_HEIGHT;
    let plot_w = width - label_width - 2.0 * PANEL_PADDING;
    let plot_h = FIGURE_HEIGHT - TITLE_HEIGHT - AXIS_HEIGHT;

    svg.push_str(&format!(
        "<g class=\"panel\" data-n=\"{}\">\n<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"18\" text-anchor=\"middle\">{}</text>\n",
        table.n,
        x0 + width / 2.0,
        TITLE_HEIGHT / 2.0,
        escape_xml(&panel_title(table, top_n))
    ));

    // axes
    svg.push_str(&format!(
        "<line x1=\"{x:.1}\" y1=\"{y1:.1}\" x2=\"{x:.1}\" y2=\"{y2:.1}\" stroke=\"black\"/>\n",
        x = plot_x,
        y1 = plot_y,
        y2 = plot_y + plot_h
    ));
    svg.push_str(&format!(
        "<line x1=\"{x1:.1}\" y1=\"{y:.1}\" x2=\"{x2:.1}\" y2=\"{y:.1}\" stroke=\"black\"/>\n",
        x1 = plot_x,
        x2 = plot_x + plot_w,
        y = plot_y + plot_h
    ));
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" text-anchor=\"middle\">Frecuencia</text>\n",
        plot_x + plot_w / 2.0,
        FIGURE_HEIGHT - 12.0
    ));
    svg.push_str(&format!(
        "<text x=\"{x:.1}\" y=\"{y:.1}\" font-size=\"14\" text-anchor=\"middle\" transform=\"rotate(-90 {x:.1} {y:.1})\">{n}-grama</text>\n",
        x = x0 + PANEL_PADDING / 2.0 + 4.0,
        y = plot_y + plot_h / 2.0,
        n = table.n
    ));

    let top = table.top(top_n);
    if top.is_empty() {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" text-anchor=\"middle\" fill=\"gray\">sin datos</text>\n</g>\n",
            plot_x + plot_w / 2.0,
            plot_y + plot_h / 2.0
        ));
        return;
    }

    let max_count = top.iter().map(|e| e.count).max().unwrap_or(1).max(1);
    let step = tick_step(max_count);
    let mut tick = 0;
    while tick <= max_count {
        let x = plot_x + plot_w * tick as f64 / max_count as f64;
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"middle\">{}</text>\n",
            x,
            plot_y + plot_h + 16.0,
            tick
        ));
        tick += step;
    }

    let slot = plot_h / top.len() as f64;
    let bar_h = slot * 0.8;
    for (rank, entry) in top.iter().enumerate() {
        let y = plot_y + rank as f64 * slot + (slot - bar_h) / 2.0;
        let bar_w = plot_w * entry.count as f64 / max_count as f64;
        svg.push_str(&format!(
            "<rect class=\"bar\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"><title>{}: {}</title></rect>\n",
            plot_x,
            y,
            bar_w,
            bar_h,
            color,
            escape_xml(&entry.label()),
            entry.count
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            plot_x - 6.0,
            y + bar_h / 2.0,
            escape_xml(&entry.label())
        ));
    }

    svg.push_str("</g>\n");
}

/// Spacing between x-axis ticks, aiming for about five ticks.
fn tick_step(max_count: usize) -> usize {
    max_count.div_ceil(5).max(1)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::NgramCount;

    fn table(n: usize, entries: &[(&str, usize)]) -> NgramTable {
        NgramTable {
            n,
            min_df: 2,
            entries: entries
                .iter()
                .map(|(label, count)| NgramCount {
                    ngram: label.split(' ').map(str::to_owned).collect(),
                    count: *count,
                })
                .collect(),
        }
    }

    #[test]
    fn test_two_panels_with_titles_and_colors() {
        let bigrams = table(2, &[("calidad docente", 4), ("escuelo rural", 2)]);
        let trigrams = table(3, &[("calidad docente rural", 3)]);

        let svg = render_comparison_svg(&[bigrams, trigrams], 15);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Top 15 2-gramas más frecuentes (min_df=2)"));
        assert!(svg.contains("Top 15 3-gramas más frecuentes (min_df=2)"));
        assert_eq!(svg.matches("fill=\"#87CEEB\"").count(), 2);
        assert_eq!(svg.matches("fill=\"#F08080\"").count(), 1);
        assert_eq!(svg.matches("class=\"bar\"").count(), 3);
        assert!(svg.contains("Frecuencia"));
        assert!(svg.contains("2-grama"));
        assert!(svg.contains("3-grama"));
    }

    #[test]
    fn test_most_frequent_bar_is_drawn_first() {
        let bigrams = table(2, &[("escuelo rural", 2), ("calidad docente", 5)]);
        let svg = render_comparison_svg(&[bigrams], 10);

        let first = svg.find("calidad docente: 5").unwrap();
        let second = svg.find("escuelo rural: 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_top_n_limits_bars() {
        let bigrams = table(2, &[("aa bb", 5), ("bb cc", 4), ("cc dd", 3)]);
        let svg = render_comparison_svg(&[bigrams], 2);
        assert_eq!(svg.matches("class=\"bar\"").count(), 2);
        assert!(!svg.contains("cc dd"));
    }

    #[test]
    fn test_empty_table_renders_placeholder() {
        let svg = render_comparison_svg(&[table(3, &[])], 15);
        assert!(svg.contains("sin datos"));
        assert!(!svg.contains("class=\"bar\""));
    }

    #[test]
    fn test_labels_are_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(1), 1);
        assert_eq!(tick_step(5), 1);
        assert_eq!(tick_step(12), 3);
    }
}
