//! Default file names and locations

/// Project configuration file, looked up in the project root
pub const CONFIG_FILE: &str = "cvtex.toml";

/// CV data file
pub const DEFAULT_DATA: &str = "cv.toml";

/// Directory holding the templates
pub const DEFAULT_TEMPLATES: &str = "templates";

/// Entry template inside the template directory
pub const DEFAULT_TEMPLATE: &str = "base.tex.j2";

/// Rendered LaTeX document
pub const DEFAULT_OUTPUT: &str = "output/cv.tex";
