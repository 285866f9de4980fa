//! Agreement page component rendering.
//!
//! Assembles one TSX page from a mapping entry, the navigation routes and
//! the document's paragraph markup. The layout is fixed: navbar, title
//! heading, content block, then the Agree/Disagree buttons. Client-side
//! storage is injected through a `storage` prop that defaults to
//! `localStorage`.

use crate::config::schema::{PageEntry, RouteConfig};
use crate::pagegen::escape::{escape_jsx_text, js_string};

/// Storage key holding the previously recorded age confirmation.
pub const ADULT_FLAG_KEY: &str = "isAdult";

/// Render a complete page component.
///
/// `paragraph_markup` is the output of
/// [`text_to_markup`](crate::pagegen::markup::text_to_markup); it is
/// inserted verbatim into the content block. The rendered text always
/// ends with a newline and contains nothing run-dependent, so rendering
/// the same inputs twice yields identical bytes.
#[must_use]
pub fn render_page(page: &PageEntry, routes: &RouteConfig, paragraph_markup: &str) -> String {
    let component = &page.component;
    let title = escape_jsx_text(&page.title);
    let adult_key = js_string(ADULT_FLAG_KEY);
    let agreement_key = js_string(&page.agreement_key());
    let agree_route = js_string(&routes.agree);
    let disagree_route = js_string(&routes.disagree);

    let mut lines: Vec<String> = Vec::new();

    // Header
    lines.push(format!(
        "// AUTO-GENERATED by {} from {}. DO NOT EDIT.",
        env!("CARGO_PKG_NAME"),
        page.source
    ));
    lines.push(r#"import { useState, useEffect } from "react";"#.to_string());
    lines.push(r#"import { useLocation } from "wouter";"#.to_string());
    lines.push(r#"import Navbar from "@/components/navbar.jsx";"#.to_string());
    lines.push(r#"import { Button } from "@/components/ui/button.jsx";"#.to_string());
    lines.push(String::new());
    lines.push(r#"type PolicyStorage = Pick<Storage, "getItem" | "setItem">;"#.to_string());
    lines.push(String::new());

    // Component state and handlers
    lines.push(format!(
        "export default function {component}({{ storage = localStorage }}: {{ storage?: PolicyStorage }}) {{"
    ));
    lines.push("  const [, setLocation] = useLocation();".to_string());
    lines.push("  const [isAdult, setIsAdult] = useState(false);".to_string());
    lines.push(String::new());
    lines.push("  useEffect(() => {".to_string());
    lines.push(format!("    const storedIsAdult = storage.getItem({adult_key});"));
    lines.push(r#"    if (storedIsAdult === "true") {"#.to_string());
    lines.push("      setIsAdult(true);".to_string());
    lines.push("    }".to_string());
    lines.push("  }, [storage]);".to_string());
    lines.push(String::new());
    lines.push("  const handleAgree = () => {".to_string());
    lines.push(format!(r#"    storage.setItem({agreement_key}, "true");"#));
    lines.push(format!("    setLocation({agree_route});"));
    lines.push("  };".to_string());
    lines.push(String::new());
    lines.push("  const handleDisagree = () => {".to_string());
    lines.push(format!("    setLocation({disagree_route});"));
    lines.push("  };".to_string());
    lines.push(String::new());

    // Layout
    lines.push("  return (".to_string());
    lines.push(r#"    <div className="min-h-screen bg-background">"#.to_string());
    lines.push("      <Navbar />".to_string());
    lines.push(String::new());
    lines.push(r#"      <div className="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12">"#.to_string());
    lines.push(format!(
        r#"        <h1 className="text-3xl font-bold text-foreground mb-6">{title}</h1>"#
    ));
    lines.push(String::new());
    lines.push(r#"        <div className="space-y-6 text-foreground">"#.to_string());
    if !paragraph_markup.is_empty() {
        lines.push(paragraph_markup.to_string());
    }
    lines.push("        </div>".to_string());
    lines.push(String::new());
    lines.push(r#"        <div className="mt-8 flex gap-4">"#.to_string());
    lines.push(r#"          <Button variant="default" onClick={handleAgree}>"#.to_string());
    lines.push("            Agree".to_string());
    lines.push("          </Button>".to_string());
    lines.push(r#"          <Button variant="destructive" onClick={handleDisagree}>"#.to_string());
    lines.push("            Disagree".to_string());
    lines.push("          </Button>".to_string());
    lines.push("        </div>".to_string());
    lines.push("      </div>".to_string());
    lines.push("    </div>".to_string());
    lines.push("  );".to_string());
    lines.push("}".to_string());
    lines.push(String::new());

    lines.join("\n")
}
