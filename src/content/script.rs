use crate::foundation::core::Rgba8;

/// Syntax role of a script line, resolved to a concrete color by a [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    /// Plain text and punctuation.
    Text,
    /// Comments.
    Comment,
    /// Keywords and control flow.
    Keyword,
    /// String literals.
    String,
    /// Function declarations and calls.
    Function,
    /// Variables and assignments.
    Variable,
    /// Class declarations.
    Class,
    /// Properties.
    Property,
}

/// One line of the decorative source code typed by the animation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScriptLine {
    /// Line content, including leading indentation.
    pub text: String,
    /// Display color role.
    pub color: ColorTag,
}

impl ScriptLine {
    /// Build a script line.
    pub fn new(text: impl Into<String>, color: ColorTag) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Number of characters (Unicode scalar values) in the line.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered, immutable list of script lines plus the file name shown in the editor chrome.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    /// File name shown in the editor title bar.
    pub title: String,
    /// Lines in typing order.
    pub lines: Vec<ScriptLine>,
}

impl Script {
    /// Build a script from its title and lines.
    pub fn new(title: impl Into<String>, lines: Vec<ScriptLine>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    /// Total characters across all lines.
    pub fn total_chars(&self) -> usize {
        self.lines.iter().map(ScriptLine::char_count).sum()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Return `true` when the script has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Colors used by the code editor renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Editor background.
    pub background: Rgba8,
    /// Line-number gutter background.
    pub gutter: Rgba8,
    /// Line-number text.
    pub line_number: Rgba8,
    /// Caret fill.
    pub caret: Rgba8,
    /// Execution highlight base color (alpha is driven by the sweep).
    pub highlight: Rgba8,
    /// [`ColorTag::Text`].
    pub text: Rgba8,
    /// [`ColorTag::Comment`].
    pub comment: Rgba8,
    /// [`ColorTag::Keyword`].
    pub keyword: Rgba8,
    /// [`ColorTag::String`].
    pub string: Rgba8,
    /// [`ColorTag::Function`].
    pub function: Rgba8,
    /// [`ColorTag::Variable`].
    pub variable: Rgba8,
    /// [`ColorTag::Class`].
    pub class: Rgba8,
    /// [`ColorTag::Property`].
    pub property: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0x0f, 0x17, 0x2a),
            gutter: Rgba8::rgb(0x0a, 0x0f, 0x1c),
            line_number: Rgba8::rgb(0x64, 0x74, 0x8b),
            caret: Rgba8::rgb(0xf8, 0xfa, 0xfc),
            highlight: Rgba8::rgb(79, 70, 229),
            text: Rgba8::rgb(0xe2, 0xe8, 0xf0),
            comment: Rgba8::rgb(0x94, 0xa3, 0xb8),
            keyword: Rgba8::rgb(0x8b, 0x5c, 0xf6),
            string: Rgba8::rgb(0x10, 0xb9, 0x81),
            function: Rgba8::rgb(0x3b, 0x82, 0xf6),
            variable: Rgba8::rgb(0xf5, 0x9e, 0x0b),
            class: Rgba8::rgb(0xec, 0x48, 0x99),
            property: Rgba8::rgb(0x06, 0xb6, 0xd4),
        }
    }
}

impl Palette {
    /// Resolve a color role.
    pub fn color(&self, tag: ColorTag) -> Rgba8 {
        match tag {
            ColorTag::Text => self.text,
            ColorTag::Comment => self.comment,
            ColorTag::Keyword => self.keyword,
            ColorTag::String => self.string,
            ColorTag::Function => self.function,
            ColorTag::Variable => self.variable,
            ColorTag::Class => self.class,
            ColorTag::Property => self.property,
        }
    }
}

/// Built-in scripts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptPreset {
    /// The hero section's `Portfolio.php` class, typed in a loop.
    #[default]
    Portfolio,
    /// The banner's `sparta-algorithm.js`, followed by an execution-line highlight sweep.
    Sparta,
}

impl ScriptPreset {
    /// Materialize the preset's script.
    pub fn script(self) -> Script {
        match self {
            Self::Portfolio => portfolio_script(),
            Self::Sparta => sparta_script(),
        }
    }
}

fn lines(raw: &[(&str, ColorTag)]) -> Vec<ScriptLine> {
    raw.iter()
        .map(|(text, color)| ScriptLine::new(*text, *color))
        .collect()
}

fn portfolio_script() -> Script {
    use ColorTag::*;

    Script::new(
        "Portfolio.php",
        lines(&[
            ("<?php", Keyword),
            ("", Text),
            ("// Portfolio Management System", Comment),
            ("namespace App\\Models;", Keyword),
            ("", Text),
            ("class Portfolio", Class),
            ("{", Text),
            ("    private string $name;", Property),
            ("    private array $projects = [];", Property),
            ("    private array $skills = [];", Property),
            ("", Text),
            ("    public function __construct(string $name)", Function),
            ("    {", Text),
            ("        $this->name = $name;", Variable),
            ("    }", Text),
            ("", Text),
            ("    public function addProject(Project $project): void", Function),
            ("    {", Text),
            ("        $this->projects[] = $project;", Variable),
            ("    }", Text),
            ("", Text),
            ("    public function getProjects(): array", Function),
            ("    {", Text),
            ("        return $this->projects;", Variable),
            ("    }", Text),
            ("", Text),
            ("    public function addSkill(string $skill): self", Function),
            ("    {", Text),
            ("        if (!in_array($skill, $this->skills)) {", Keyword),
            ("            $this->skills[] = $skill;", Variable),
            ("        }", Text),
            ("        return $this;", Keyword),
            ("    }", Text),
            ("", Text),
            ("    public function displayInfo(): string", Function),
            ("    {", Text),
            ("        return \"Portfolio: {$this->name}\";", String),
            ("    }", Text),
            ("}", Text),
            ("", Text),
            ("// Usage", Comment),
            ("$portfolio = new Portfolio('Yassine');", Variable),
            ("$portfolio->addSkill('PHP')->addSkill('Laravel');", Variable),
        ]),
    )
}

fn sparta_script() -> Script {
    use ColorTag::*;

    let block: &[(&str, ColorTag)] = &[
        ("// Ghost of Sparta Algorithm", Comment),
        ("function breakCycle(path) {", Function),
        ("  const visited = new Set();", Variable),
        ("  const sparta = {", Variable),
        ("    strength: 100,", Variable),
        ("    rage: 0", Variable),
        ("  };", Variable),
        ("", Text),
        ("  while (path.length > 0) {", Keyword),
        ("    const node = path.shift();", Variable),
        ("    if (visited.has(node)) {", Keyword),
        ("      console.log('Cycle detected');", Function),
        ("      sparta.rage += 10;", Variable),
        ("    }", Keyword),
        ("", Text),
        ("    if (sparta.rage > 50) {", Keyword),
        ("      return 'CYCLE BROKEN';", String),
        ("    }", Keyword),
        ("", Text),
        ("    visited.add(node);", Function),
        ("  }", Keyword),
        ("  return 'Path completed';", String),
        ("}", Function),
    ];

    // The banner types the algorithm twice before the highlight sweep starts.
    let mut out = lines(block);
    out.extend(lines(block));
    Script::new("sparta-algorithm.js", out)
}

#[cfg(test)]
#[path = "../../tests/unit/content/script.rs"]
mod tests;
