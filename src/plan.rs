//! Generation plan.
//! Maps a `GenerationConfig` to the ordered list of filesystem operations, the
//! context the rendered templates see and the package manifest.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{GenerationConfig, ModuleFormat, StylesheetEngine, ViewEngine};
use crate::constants::{CURRENT_DIR, MODE_0666, MODE_0755};
use crate::error::Result;

/// One filesystem step. Destination paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateDirectory(PathBuf),
    CopyStaticFile { template: String, dest: PathBuf, mode: u32 },
    CopyTemplateGlob { template_dir: String, dest_dir: PathBuf, pattern: String },
    /// Render with the plan's context.
    RenderAndWrite { template: String, dest: PathBuf, mode: u32 },
    /// Serialize the plan's manifest.
    WriteManifest(PathBuf),
}

/// A module the generated `app.js` imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleImport {
    pub binding: String,
    pub package: String,
}

/// View engine wiring for `app.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewDescriptor {
    pub engine: String,
    /// Render function for engines Express cannot load by name.
    pub render: Option<String>,
}

/// Variables available to rendered templates.
///
/// `modules` and `uses` keep insertion order; `app.js` registers middleware in
/// exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub name: String,
    pub modules: Vec<ModuleImport>,
    pub uses: Vec<String>,
    pub view: Option<ViewDescriptor>,
}

impl TemplateContext {
    fn import(&mut self, binding: &str, package: &str) {
        self.modules.push(ModuleImport { binding: binding.to_string(), package: package.to_string() });
    }

    fn use_middleware(&mut self, expression: &str) {
        self.uses.push(expression.to_string());
    }
}

/// The generated `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(rename = "type")]
    pub module_type: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl Manifest {
    fn new(name: &str, format: ModuleFormat) -> Self {
        let scripts = IndexMap::from([
            ("start".to_string(), "nodemon ./bin/www".to_string()),
            ("format".to_string(), "prettier --write \"**/*.{js,json,md}\"".to_string()),
        ]);
        let dependencies = IndexMap::from([
            ("cors".to_string(), "^2.8.5".to_string()),
            ("debug".to_string(), "~4.4.0".to_string()),
            ("dotenv".to_string(), "^16.5.0".to_string()),
            ("express".to_string(), "~5.1.0".to_string()),
        ]);
        let dev_dependencies = IndexMap::from([
            ("nodemon".to_string(), "^3.1.9".to_string()),
            ("prettier".to_string(), "^3.5.3".to_string()),
        ]);
        Self {
            name: name.to_string(),
            version: "0.0.0".to_string(),
            private: true,
            module_type: format.package_type().to_string(),
            scripts,
            dependencies,
            dev_dependencies,
        }
    }

    pub fn add_dependency(&mut self, package: &str, range: &str) {
        self.dependencies.insert(package.to_string(), range.to_string());
    }

    /// Orders dependencies by name, the way npm writes them.
    pub fn sort_dependencies(&mut self) {
        self.dependencies.sort_keys();
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)? + "\n")
    }
}

/// Ordered operations plus the data they consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub operations: Vec<Operation>,
    pub context: TemplateContext,
    pub manifest: Manifest,
}

/// Middleware a stylesheet engine adds to `app.js`.
struct StylesheetMiddleware {
    binding: &'static str,
    package: &'static str,
    range: &'static str,
    expression: &'static str,
}

fn stylesheet_middleware(engine: StylesheetEngine) -> Option<StylesheetMiddleware> {
    let middleware = match engine {
        StylesheetEngine::Css => return None,
        StylesheetEngine::Compass => StylesheetMiddleware {
            binding: "compass",
            package: "node-compass",
            range: "~0.2.4",
            expression: "compass({ mode: 'expanded' })",
        },
        StylesheetEngine::Less => StylesheetMiddleware {
            binding: "lessMiddleware",
            package: "less-middleware",
            range: "~3.1.0",
            expression: "lessMiddleware(path.join(__dirname, 'public'))",
        },
        StylesheetEngine::Sass => StylesheetMiddleware {
            binding: "sassMiddleware",
            package: "node-sass-middleware",
            range: "~1.1.0",
            expression: "sassMiddleware({\n  src: path.join(__dirname, 'public'),\n  dest: path.join(__dirname, 'public'),\n  indentedSyntax: true, // true = .sass and false = .scss\n  sourceMap: true\n})",
        },
        StylesheetEngine::Stylus => StylesheetMiddleware {
            binding: "stylus",
            package: "stylus",
            range: "~0.64.0",
            expression: "stylus.middleware(path.join(__dirname, 'public'))",
        },
    };
    Some(middleware)
}

/// Package and version range of a view engine.
fn view_dependency(engine: ViewEngine) -> (&'static str, &'static str) {
    match engine {
        ViewEngine::Dust => ("adaro", "~1.0.4"),
        ViewEngine::Ejs => ("ejs", "~3.1.10"),
        ViewEngine::Hbs => ("hbs", "~4.2.0"),
        ViewEngine::Hjs => ("hjs", "~0.0.6"),
        ViewEngine::Pug => ("pug", "~3.0.3"),
        ViewEngine::Twig => ("twig", "~1.17.1"),
        ViewEngine::Vash => ("vash", "~0.13.0"),
    }
}

/// Builds the plan for a validated configuration.
///
/// The operation order is fixed, so the same configuration always yields the
/// same file list in the same order.
pub fn build_plan(config: &GenerationConfig) -> GenerationPlan {
    let sources = config.module_format.template_dir();
    let mut operations = Vec::new();
    let mut context = TemplateContext { name: config.app_name.clone(), ..Default::default() };
    let mut manifest = Manifest::new(&config.app_name, config.module_format);

    context.import("logger", "morgan");
    context.use_middleware("logger('dev')");
    manifest.add_dependency("morgan", "~1.10.0");

    context.use_middleware("express.json()");
    context.use_middleware("express.urlencoded({ extended: false })");

    context.import("cookieParser", "cookie-parser");
    context.use_middleware("cookieParser()");
    manifest.add_dependency("cookie-parser", "~1.4.7");

    context.import("cors", "cors");
    context.use_middleware("cors()");

    let mkdir = |operations: &mut Vec<Operation>, path: &str| {
        operations.push(Operation::CreateDirectory(PathBuf::from(path)));
    };

    if !config.in_current_dir() {
        mkdir(&mut operations, CURRENT_DIR);
    }
    for dir in ["public", "public/javascripts", "public/images", "public/stylesheets", "middlewares", "utils"] {
        mkdir(&mut operations, dir);
    }

    operations.push(Operation::CopyTemplateGlob {
        template_dir: "css".to_string(),
        dest_dir: PathBuf::from("public/stylesheets"),
        pattern: config.css.pattern().to_string(),
    });

    operations.push(Operation::CopyStaticFile {
        template: format!("{sources}/prettierrc.json"),
        dest: PathBuf::from(".prettierrc.json"),
        mode: MODE_0666,
    });

    for dir in ["config", "routes"] {
        mkdir(&mut operations, dir);
        operations.push(Operation::CopyTemplateGlob {
            template_dir: format!("{sources}/{dir}"),
            dest_dir: PathBuf::from(dir),
            pattern: "*.js".to_string(),
        });
    }

    match config.view {
        Some(engine) => {
            mkdir(&mut operations, "views");
            manifest.add_dependency("http-errors", "~2.0.0");
            operations.push(Operation::CopyTemplateGlob {
                template_dir: format!("{sources}/middlewares"),
                dest_dir: PathBuf::from("middlewares"),
                pattern: "*.js".to_string(),
            });
            operations.push(Operation::CopyTemplateGlob {
                template_dir: "views".to_string(),
                dest_dir: PathBuf::from("views"),
                pattern: engine.pattern(),
            });
        }
        None => operations.push(Operation::CopyStaticFile {
            template: "js/index.html".to_string(),
            dest: PathBuf::from("public/index.html"),
            mode: MODE_0666,
        }),
    }

    if let Some(middleware) = stylesheet_middleware(config.css) {
        context.import(middleware.binding, middleware.package);
        context.use_middleware(middleware.expression);
        manifest.add_dependency(middleware.package, middleware.range);
    }

    if let Some(engine) = config.view {
        let render = match engine {
            ViewEngine::Dust => {
                context.import("adaro", "adaro");
                Some("adaro.dust()".to_string())
            }
            _ => None,
        };
        context.view = Some(ViewDescriptor { engine: engine.name().to_string(), render });
        let (package, range) = view_dependency(engine);
        manifest.add_dependency(package, range);
    }

    // Must stay last so the other middleware run first.
    context.use_middleware("express.static(path.join(__dirname, 'public'))");

    if config.git {
        operations.push(Operation::CopyStaticFile {
            template: "gitignore".to_string(),
            dest: PathBuf::from(".gitignore"),
            mode: MODE_0666,
        });
    }
    operations.push(Operation::CopyStaticFile {
        template: "README.md".to_string(),
        dest: PathBuf::from("README.md"),
        mode: MODE_0666,
    });

    manifest.sort_dependencies();

    operations.push(Operation::RenderAndWrite {
        template: format!("{sources}/app.js.j2"),
        dest: PathBuf::from("app.js"),
        mode: MODE_0666,
    });
    operations.push(Operation::WriteManifest(PathBuf::from("package.json")));
    mkdir(&mut operations, "bin");
    operations.push(Operation::RenderAndWrite {
        template: format!("{sources}/www.j2"),
        dest: PathBuf::from("bin/www"),
        mode: MODE_0755,
    });
    operations.push(Operation::RenderAndWrite {
        template: "env.j2".to_string(),
        dest: PathBuf::from(".env"),
        mode: MODE_0666,
    });

    log::debug!("planned {} operation(s) for {}", operations.len(), config.app_name);
    GenerationPlan { operations, context, manifest }
}
