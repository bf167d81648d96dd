use crate::fsize;
use crate::geometry::primitives::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use crate::entities::Sheet;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws a sheet with all its placed pieces.
/// The viewbox has some margin around the sheet to fit a label with its dimensions and efficiency.
pub fn sheet_to_svg(sheet: &Sheet, options: SvgDrawOptions, title: &str) -> Document {
    let bbox = sheet.spec.bbox();
    let theme = &options.theme;

    let min_dim = fsize::min(bbox.width(), bbox.height());
    let margin = 0.05 * min_dim;
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;
    let font_size = min_dim * 0.025;

    let label = {
        let stats = sheet.stats();
        let label_content = format!(
            "{} | {}mm | width: {:.1} | height: {:.1} | efficiency: {:.2}% | {}",
            sheet.spec.code,
            sheet.thickness_mm(),
            bbox.width(),
            bbox.height(),
            stats.efficiency,
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set("y", bbox.y_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let sheet_group = Group::new()
        .set("id", "sheet")
        .add(svg_util::data_to_path(
            svg_util::rect_data(&bbox),
            &[
                ("fill", &*format!("{}", theme.sheet_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "sheet {}, {:.1} x {:.1}",
            sheet.spec.code,
            bbox.width(),
            bbox.height()
        )));

    let pieces_group = {
        let mut pieces_group = Group::new().set("id", "pieces");
        for (i, pp) in sheet.placed_pieces.iter().enumerate() {
            let rect = pp.bbox();
            let fill = match pp.rotated() {
                true => theme.rotated_piece_fill,
                false => theme.piece_fill,
            };
            let stroke = svg_util::change_brightness(fill, 0.5);
            let mut piece_group = Group::new()
                .set("id", format!("piece_{i}"))
                .add(svg_util::data_to_path(
                    svg_util::rect_data(&rect),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("stroke", &*format!("{stroke}")),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(Title::new(format!(
                    "piece {i}, demand line: {}, {} x {}{}, at ({}, {})",
                    pp.demand_id,
                    pp.width,
                    pp.height,
                    if pp.rotated() { " (rotated)" } else { "" },
                    pp.x,
                    pp.y
                )));
            if options.piece_labels {
                piece_group = piece_group.add(piece_label(&rect, pp.width, pp.height));
            }
            pieces_group = pieces_group.add(piece_group);
        }
        pieces_group
    };

    let free_region_group = match options.free_regions {
        false => None,
        true => {
            let mut group = Group::new().set("id", "free_regions");
            for region in sheet.free_space().regions() {
                group = group.add(svg_util::data_to_path(
                    svg_util::rect_data(&region.rect()),
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{}", theme.free_region_stroke)),
                        ("stroke-width", &*format!("{stroke_width}")),
                        (
                            "stroke-dasharray",
                            &*format!("{} {}", 4.0 * stroke_width, 8.0 * stroke_width),
                        ),
                        ("stroke-linecap", "round"),
                    ],
                ));
            }
            Some(group)
        }
    };

    let vbox = (
        bbox.x_min - margin,
        bbox.y_min - margin - font_size,
        bbox.width() + 2.0 * margin,
        bbox.height() + 2.0 * margin + font_size,
    );

    let document = Document::new()
        .set("viewBox", vbox)
        .add(sheet_group)
        .add(pieces_group);

    let document = match free_region_group {
        Some(group) => document.add(group),
        None => document,
    };

    document.add(label)
}

/// Dimensions of the piece as requested, centered on its footprint
fn piece_label(rect: &Rect, width: fsize, height: fsize) -> Text {
    let font_size = 0.15 * fsize::min(rect.width(), rect.height());
    Text::new(format!("{width} x {height}"))
        .set("x", (rect.x_min + rect.x_max) / 2.0)
        .set("y", (rect.y_min + rect.y_max) / 2.0)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
}
