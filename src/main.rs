//! Command-line shell: loads a presentation (or the demo), prints it, and
//! optionally saves it back out.
//!
//! ```bash
//! lectern talk.xml --outline
//! lectern --save demo.xml
//! lectern talk.xml --config editor.json
//! ```

use clap::Parser;
use lectern::{Editor, EditorConfig, LecternError, Rect, Source};
use std::path::PathBuf;

/// Inspect and convert slide presentations
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(version, about, long_about = None)]
struct Args {
    /// Presentation XML file. The built-in demo is used when omitted.
    file: Option<PathBuf>,

    /// Write the loaded presentation to this file
    #[arg(long, value_name = "OUT")]
    save: Option<PathBuf>,

    /// Editor configuration JSON
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Print only titles and items instead of the laid-out slides
    #[arg(long)]
    outline: bool,

    /// Drawing area width for the layout dump
    #[arg(long, default_value_t = 1200.0)]
    width: f32,

    /// Drawing area height for the layout dump
    #[arg(long, default_value_t = 800.0)]
    height: f32,
}

fn main() -> Result<(), LecternError> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = Editor::builder();
    if let Some(path) = &args.config {
        builder = builder.with_config(&EditorConfig::from_file(path)?)?;
    }
    let mut editor = builder.build();

    let source = match &args.file {
        Some(path) => Source::File(path.clone()),
        None => Source::Demo,
    };
    let diagnostics = editor.open(&source)?;
    for diagnostic in &diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    if args.outline {
        print_outline(&editor);
    } else {
        print_layout(&mut editor, Rect::new(0.0, 0.0, args.width, args.height));
    }

    if let Some(out) = &args.save {
        editor.save(out)?;
        println!("Saved to {}", out.display());
    }
    Ok(())
}

fn print_outline(editor: &Editor) {
    let presentation = editor.presentation();
    let max_level = editor.styles().max_level();
    println!("{}", presentation.title());
    for (index, slide) in presentation.slides().iter().enumerate() {
        println!("{:>3}. {}", index + 1, slide.title());
        for item in slide.items() {
            let indent = outline_indent(item.level(), max_level);
            println!("{}[{}] {}", indent, item.kind(), item.content());
        }
    }
}

/// Indentation for an outline row. Levels past the deepest style share its
/// depth.
fn outline_indent(level: u32, max_level: usize) -> String {
    let depth = usize::try_from(level).unwrap_or(usize::MAX).min(max_level);
    "  ".repeat(depth + 2)
}

fn print_layout(editor: &mut Editor, area: Rect) {
    println!("{}", editor.presentation().title());
    loop {
        if let Some(index) = editor.presentation().current_index() {
            println!("--- slide {} of {}", index + 1, editor.presentation().len());
        }
        for placement in editor.layout_current(area) {
            let rect = placement.rect;
            println!(
                "{:>8.1} {:>8.1} {:>8.1} {:>8.1}  {} {}: {}",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                placement.item.kind(),
                placement.item.level(),
                placement.item.content()
            );
        }
        if !editor.next_slide() {
            break;
        }
    }
}
