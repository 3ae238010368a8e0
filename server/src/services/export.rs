//! Export service — standalone HTML player and thumbnail markup.
//!
//! DESIGN
//! ======
//! Export is a string template: every slide fragment is embedded verbatim in
//! a fixed-size stage inside one self-contained document with keyboard and
//! button navigation. Nothing is parsed or rewritten — the fragments are the
//! canvas's own serialized output and embed as-is.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use canvas::consts::{STAGE_HEIGHT_PX, STAGE_WIDTH_PX};
use canvas::slide::Slide;

/// Render the whole deck as a single self-contained HTML document.
#[must_use]
pub fn standalone_document(title: &str, slides: &[Slide]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    out.push_str(concat!(
        "<style>\n",
        "body { margin: 0; padding: 0; font-family: sans-serif; overflow: hidden; background: #000; }\n",
        ".slide { display: none; width: 100vw; height: 100vh; background: white; ",
        "align-items: center; justify-content: center; position: relative; }\n",
        ".slide.active { display: flex; }\n",
        ".controls { position: fixed; bottom: 20px; right: 20px; z-index: 1000; }\n",
        "button { padding: 10px 20px; cursor: pointer; background: rgba(255,255,255,0.2); ",
        "color: white; border: 1px solid white; }\n",
        "</style>\n</head>\n<body>\n",
    ));

    for (index, slide) in slides.iter().enumerate() {
        let active = if index == 0 { " active" } else { "" };
        out.push_str(&format!("<div id=\"slide-{index}\" class=\"slide{active}\">\n"));
        out.push_str(&format!(
            "<div style=\"width: {STAGE_WIDTH_PX}px; height: {STAGE_HEIGHT_PX}px; position: relative; overflow: hidden; transform: scale(1.5);\">\n"
        ));
        out.push_str(&slide.html_content);
        out.push_str("\n</div>\n</div>\n");
    }

    out.push_str(concat!(
        "<div class=\"controls\">\n",
        "<button onclick=\"prev()\">Prev</button>\n",
        "<button onclick=\"next()\">Next</button>\n",
        "</div>\n<script>\n",
        "let current = 0;\n",
    ));
    out.push_str(&format!("const total = {};\n", slides.len()));
    out.push_str(concat!(
        "function show(idx) {\n",
        "  document.querySelectorAll('.slide').forEach(el => el.classList.remove('active'));\n",
        "  document.getElementById('slide-' + idx).classList.add('active');\n",
        "}\n",
        "function next() { current = (current + 1) % total; show(current); }\n",
        "function prev() { current = (current - 1 + total) % total; show(current); }\n",
        "document.addEventListener('keydown', e => {\n",
        "  if (e.key === 'ArrowRight' || e.key === ' ') next();\n",
        "  if (e.key === 'ArrowLeft') prev();\n",
        "});\n",
        "</script>\n</body>\n</html>\n",
    ));
    out
}

/// Scaled, pointer-inert preview markup for a sidebar thumbnail.
#[must_use]
pub fn thumbnail_markup(slide: &Slide) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<div style=\"width: {STAGE_WIDTH_PX}px; height: {STAGE_HEIGHT_PX}px; transform: scale(0.2); transform-origin: top left; pointer-events: none; overflow: hidden; background: #ffffff;\">"
    ));
    out.push_str(&slide.html_content);
    out.push_str("</div>");
    out
}

/// Minimal text escaping for the document title slot.
fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
