//! Project entries for the portfolio, including the architecture graphs
//! rendered by the diagram viewer.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use diagram::graph::{Connection, DiagramComponent, DiagramGraph, EdgeStyle};

/// A screenshot shown in the project carousel.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// A code excerpt shown in the tabbed snippet viewer.
#[derive(Debug, Clone)]
pub struct CodeSnippet {
    pub title: String,
    pub language: String,
    pub code: String,
}

/// One portfolio project with everything its detail page renders.
#[derive(Debug, Clone)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub summary: String,
    pub tech: Vec<String>,
    pub repo_url: Option<String>,
    pub screenshots: Vec<Screenshot>,
    pub snippets: Vec<CodeSnippet>,
    pub graph: DiagramGraph,
}

/// All projects in display order.
#[must_use]
pub fn all() -> Vec<Project> {
    vec![structsure(), beamspan()]
}

/// Look up a project by its URL slug.
#[must_use]
pub fn by_slug(slug: &str) -> Option<Project> {
    all().into_iter().find(|p| p.slug == slug)
}

fn node(id: &str, label: &str, x: f64, y: f64, color: &str, description: &str) -> DiagramComponent {
    DiagramComponent {
        id: id.to_owned(),
        label: label.to_owned(),
        x,
        y,
        color: color.to_owned(),
        description: description.to_owned(),
    }
}

fn edge(from: &str, to: &str, label: &str, style: EdgeStyle) -> Connection {
    Connection {
        from: from.to_owned(),
        to: to.to_owned(),
        label: label.to_owned(),
        style,
        color: None,
    }
}

fn structsure() -> Project {
    let graph = DiagramGraph {
        components: vec![
            node(
                "web",
                "Web App",
                18.0,
                30.0,
                "#38BDF8",
                "React + TypeScript single-page app used by inspectors in the \
                 field, with offline draft storage for sites without coverage.",
            ),
            node(
                "api",
                "REST API",
                50.0,
                30.0,
                "#A78BFA",
                "Node.js service that owns inspection workflows, report \
                 versioning, and role-based access for councils and contractors.",
            ),
            node(
                "db",
                "PostgreSQL",
                82.0,
                18.0,
                "#34D399",
                "Primary store for structures, inspections, and defect records, \
                 with PostGIS for locating assets on the map view.",
            ),
            node(
                "queue",
                "Job Queue",
                50.0,
                66.0,
                "#FBBF24",
                "Redis-backed queue that decouples slow work (photo processing, \
                 PDF reports) from the request path.",
            ),
            node(
                "worker",
                "Worker",
                78.0,
                66.0,
                "#F87171",
                "Background worker that renders inspection reports, resizes \
                 photo uploads, and fans out notification emails.",
            ),
            node(
                "storage",
                "Object Storage",
                82.0,
                42.0,
                "#60A5FA",
                "S3-compatible bucket holding inspection photos and generated \
                 report PDFs behind signed URLs.",
            ),
        ],
        connections: vec![
            edge("web", "api", "JSON / HTTPS", EdgeStyle::Solid),
            edge("api", "db", "SQL", EdgeStyle::Solid),
            edge("api", "queue", "enqueue jobs", EdgeStyle::Dashed),
            edge("queue", "worker", "consume", EdgeStyle::Dashed),
            edge("worker", "storage", "write reports", EdgeStyle::Solid),
            edge("api", "storage", "signed URLs", EdgeStyle::Solid),
        ],
    };

    Project {
        slug: "structsure".to_owned(),
        title: "StructSure".to_owned(),
        tagline: "Inspection tracking for bridges and buildings".to_owned(),
        summary: "A platform for managing structural inspection programs: \
                  field data capture with photos, defect severity tracking \
                  over time, and automatically generated compliance reports. \
                  Built after years of watching this workflow live in \
                  spreadsheets and camera rolls."
            .to_owned(),
        tech: ["React", "TypeScript", "Node.js", "PostgreSQL", "Redis", "S3"]
            .map(str::to_owned)
            .to_vec(),
        repo_url: Some("https://github.com/tanvirhasan-dev/structsure".to_owned()),
        screenshots: vec![
            Screenshot {
                src: "/public/images/structsure-dashboard.svg".to_owned(),
                alt: "StructSure dashboard with inspection schedule".to_owned(),
                caption: "Program dashboard: upcoming inspections and overdue defects"
                    .to_owned(),
            },
            Screenshot {
                src: "/public/images/structsure-defects.svg".to_owned(),
                alt: "Defect detail view with severity history".to_owned(),
                caption: "Defect tracking with severity history per structure".to_owned(),
            },
        ],
        snippets: vec![
            CodeSnippet {
                title: "Severity rollup".to_owned(),
                language: "sql".to_owned(),
                code: "-- Worst open defect per structure, for the map pins\n\
                       SELECT s.id,\n       s.name,\n       \
                       MAX(d.severity) FILTER (WHERE d.status = 'open') AS worst_open\n\
                       FROM structures s\n\
                       LEFT JOIN defects d ON d.structure_id = s.id\n\
                       GROUP BY s.id, s.name;"
                    .to_owned(),
            },
            CodeSnippet {
                title: "Report job".to_owned(),
                language: "typescript".to_owned(),
                code: "export async function enqueueReport(inspectionId: string) {\n\
                       \u{20} // Idempotent per inspection: re-running replaces the draft.\n\
                       \u{20} await queue.add('render-report', { inspectionId }, {\n\
                       \u{20}   jobId: `report:${inspectionId}`,\n\
                       \u{20}   removeOnComplete: true,\n\
                       \u{20} });\n}"
                    .to_owned(),
            },
        ],
        graph,
    }
}

fn beamspan() -> Project {
    let graph = DiagramGraph {
        components: vec![
            node(
                "ui",
                "Browser UI",
                20.0,
                28.0,
                "#38BDF8",
                "TypeScript canvas UI for sketching beams, supports, and \
                 loads, with live redraw as the model changes.",
            ),
            node(
                "bridge",
                "WASM Bridge",
                50.0,
                28.0,
                "#FBBF24",
                "Thin wasm-bindgen layer that moves the beam model across \
                 the JS/Rust boundary as flat arrays.",
            ),
            node(
                "solver",
                "Solver Core",
                80.0,
                28.0,
                "#F87171",
                "Rust stiffness-matrix solver producing shear, moment, and \
                 deflection diagrams in a few milliseconds.",
            ),
            node(
                "plots",
                "Diagram Renderer",
                35.0,
                68.0,
                "#A78BFA",
                "Renders the solver output as layered SVG plots with hover \
                 readouts at any station along the span.",
            ),
            node(
                "export",
                "PDF Export",
                68.0,
                68.0,
                "#34D399",
                "Client-side PDF generation so calculation sheets never \
                 leave the browser.",
            ),
        ],
        connections: vec![
            edge("ui", "bridge", "model updates", EdgeStyle::Solid),
            edge("bridge", "solver", "solve()", EdgeStyle::Solid),
            edge("solver", "plots", "results", EdgeStyle::Solid),
            edge("plots", "export", "calc sheet", EdgeStyle::Dashed),
        ],
    };

    Project {
        slug: "beamspan".to_owned(),
        title: "BeamSpan".to_owned(),
        tagline: "Structural beam analysis that runs entirely in the browser".to_owned(),
        summary: "An interactive beam calculator: sketch a beam, place \
                  supports and loads, and get shear, moment, and deflection \
                  diagrams instantly. The solver is Rust compiled to \
                  WebAssembly, so nothing is uploaded and results update on \
                  every keystroke."
            .to_owned(),
        tech: ["Rust", "WebAssembly", "wasm-bindgen", "TypeScript", "SVG"]
            .map(str::to_owned)
            .to_vec(),
        repo_url: Some("https://github.com/tanvirhasan-dev/beamspan".to_owned()),
        screenshots: vec![
            Screenshot {
                src: "/public/images/beamspan-editor.svg".to_owned(),
                alt: "BeamSpan editor with a two-span beam and point loads".to_owned(),
                caption: "Editor view: a two-span beam under mixed loading".to_owned(),
            },
            Screenshot {
                src: "/public/images/beamspan-diagrams.svg".to_owned(),
                alt: "Shear and moment diagrams with hover readout".to_owned(),
                caption: "Live shear and moment diagrams with station readouts".to_owned(),
            },
        ],
        snippets: vec![
            CodeSnippet {
                title: "Solver entry".to_owned(),
                language: "rust".to_owned(),
                code: "#[wasm_bindgen]\n\
                       pub fn solve(model: &JsValue) -> Result<JsValue, JsValue> {\n\
                       \u{20}   let beam: BeamModel = serde_wasm_bindgen::from_value(model.clone())?;\n\
                       \u{20}   let results = stiffness::solve(&beam).map_err(to_js_error)?;\n\
                       \u{20}   serde_wasm_bindgen::to_value(&results).map_err(Into::into)\n\
                       }"
                    .to_owned(),
            },
            CodeSnippet {
                title: "Moment diagram".to_owned(),
                language: "rust".to_owned(),
                code: "/// Bending moment at `x`, summing contributions left of the station.\n\
                       fn moment_at(&self, x: f64) -> f64 {\n\
                       \u{20}   self.reactions\n\
                       \u{20}       .iter()\n\
                       \u{20}       .chain(self.loads.iter())\n\
                       \u{20}       .filter(|f| f.position <= x)\n\
                       \u{20}       .map(|f| f.magnitude * (x - f.position))\n\
                       \u{20}       .sum()\n\
                       }"
                    .to_owned(),
            },
        ],
        graph,
    }
}
