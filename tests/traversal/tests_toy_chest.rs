//! Table-based visitors over the sample toy chest.

use std::io;

use composite::{
    Context, HandlerKey, Phase, Result, Type, VisitError, Visitor, provide_trace_visitor, type_of,
};
use once_cell::sync::Lazy;

use crate::helpers::toys::{
    BALL, BOOK, BOX, Ball, Book, Content, TOY, Toy, ToyBox, ToyHandlers, toy_chest,
};

// ============================================================================
// Describe every toy
// ============================================================================

#[derive(Default)]
struct Describer {
    lines: Vec<String>,
}

static DESCRIBER: Lazy<ToyHandlers<Describer>> = Lazy::new(|| {
    ToyHandlers::<Describer>::new().visit(&TOY, |describer, toy, _| {
        describer.lines.push(toy.describe());
        Ok(())
    })
});

impl Visitor<dyn Toy> for Describer {
    type Intention = Content;

    fn dispatch(
        &mut self,
        phase: Phase,
        ty: &'static Type,
        node: &(dyn Toy + 'static),
        context: Context<'_, Content>,
    ) -> Result<()> {
        DESCRIBER.dispatch(self, phase, ty, node, context)
    }
}

#[test]
fn test_describe_every_toy() {
    let mut describer = Describer::default();
    toy_chest().accept(&mut describer).unwrap();

    assert_eq!(
        describer.lines,
        vec![
            "Box holds 3 items:",
            "A book named Lord of the Rings",
            "A book named Design Patterns",
            "Box holds 4 items:",
            "A small red ball",
            "A small green ball",
            "A large doll that has green hair and a blue shirt",
            "An art book from \"How to Train Your Dragon\" named The Art of How to Train Your Dragon",
        ]
    );
}

// ============================================================================
// List just books
// ============================================================================

#[derive(Default)]
struct BookLister {
    books: Vec<String>,
}

static BOOK_LISTER: Lazy<ToyHandlers<BookLister>> = Lazy::new(|| {
    ToyHandlers::<BookLister>::new().visit(&BOOK, |lister, book, _| {
        lister.books.push(book.describe());
        Ok(())
    })
});

impl Visitor<dyn Toy> for BookLister {
    type Intention = Content;

    fn dispatch(
        &mut self,
        phase: Phase,
        ty: &'static Type,
        node: &(dyn Toy + 'static),
        context: Context<'_, Content>,
    ) -> Result<()> {
        BOOK_LISTER.dispatch(self, phase, ty, node, context)
    }
}

#[test]
fn test_book_lister_sees_only_books() {
    let shelf = ToyBox::new(vec![Box::new(Book::new("A")), Box::new(Book::new("B"))]);
    let mut lister = BookLister::default();
    shelf.accept(&mut lister).unwrap();

    assert_eq!(lister.books, vec!["A book named A", "A book named B"]);
    assert_eq!(BOOK_LISTER.len(), 1);
    assert!(!BOOK_LISTER.contains(Phase::Visit, &BOX));
}

#[test]
fn test_book_lister_includes_derived_books() {
    let mut lister = BookLister::default();
    toy_chest().accept(&mut lister).unwrap();

    assert_eq!(lister.books.len(), 3);
    assert!(lister.books[2].starts_with("An art book"));
}

// ============================================================================
// Nesting printer: neutral vs. intention contexts
// ============================================================================

#[derive(Default)]
struct NestingPrinter {
    depth: usize,
    lines: Vec<String>,
}

impl NestingPrinter {
    fn print(&mut self, line: String) {
        self.lines.push(format!("{}{line}", "  ".repeat(self.depth)));
    }
}

fn box_len(toy: &dyn Toy, phase: Phase) -> Result<usize> {
    toy.as_any()
        .downcast_ref::<ToyBox>()
        .map(|toy_box| toy_box.toys.len())
        .ok_or_else(|| VisitError::handler(HandlerKey::new(phase, &BOX), "not a box"))
}

static NESTING: Lazy<ToyHandlers<NestingPrinter>> = Lazy::new(|| {
    ToyHandlers::<NestingPrinter>::new()
        .enter(&TOY, |printer, toy, context| {
            printer.print(format!(
                "EnteredToy ({}) with context {context}:{}",
                type_of(toy),
                toy.describe()
            ));
            Ok(())
        })
        .exit(&TOY, |printer, toy, context| {
            printer.print(format!("Exited toy with context {context}:{}", toy.describe()));
            Ok(())
        })
        .enter(&BOX, |printer, toy, context| {
            if !context.is_neutral() {
                let len = box_len(toy, Phase::Enter)?;
                printer.print(format!("Entering box of {len} items"));
                printer.depth += 1;
            }
            Ok(())
        })
        .exit(&BOX, |printer, toy, context| {
            if !context.is_neutral() {
                let len = box_len(toy, Phase::Exit)?;
                printer.depth -= 1;
                printer.print(format!("Exiting box of {len} items"));
            }
            Ok(())
        })
});

impl Visitor<dyn Toy> for NestingPrinter {
    type Intention = Content;

    fn dispatch(
        &mut self,
        phase: Phase,
        ty: &'static Type,
        node: &(dyn Toy + 'static),
        context: Context<'_, Content>,
    ) -> Result<()> {
        NESTING.dispatch(self, phase, ty, node, context)
    }
}

#[test]
fn test_nesting_printer_indents_children() {
    let chest = ToyBox::new(vec![
        Box::new(Book::new("A")),
        Box::new(ToyBox::special(vec![Box::new(Ball::new("small", "red"))])),
    ]);
    let mut printer = NestingPrinter::default();
    chest.accept(&mut printer).unwrap();

    assert_eq!(printer.depth, 0);
    assert_eq!(
        printer.lines,
        vec![
            "EnteredToy (Box) with context neutral:Box holds 2 items:",
            "EnteredToy (Box) with context content:Box holds 2 items:",
            "Entering box of 2 items",
            "  EnteredToy (Book) with context neutral:A book named A",
            "  Exited toy with context neutral:A book named A",
            "  EnteredToy (SpecialBox) with context neutral:Box holds 1 items:",
            "  EnteredToy (SpecialBox) with context content:Box holds 1 items:",
            "  Entering box of 1 items",
            "    EnteredToy (Ball) with context neutral:A small red ball",
            "    Exited toy with context neutral:A small red ball",
            "  Exiting box of 1 items",
            "  Exited toy with context content:Box holds 1 items:",
            "  Exited toy with context neutral:Box holds 1 items:",
            "Exiting box of 2 items",
            "Exited toy with context content:Box holds 2 items:",
            "Exited toy with context neutral:Box holds 2 items:",
        ]
    );
}

// ============================================================================
// Failing handlers
// ============================================================================

struct BallHater {
    visited: Vec<String>,
}

static BALL_HATER: Lazy<ToyHandlers<BallHater>> = Lazy::new(|| {
    ToyHandlers::<BallHater>::new()
        .visit(&TOY, |hater, toy, _| {
            hater.visited.push(toy.describe());
            Ok(())
        })
        .visit(&BALL, |_, _, _| {
            Err(VisitError::custom(io::Error::other("balls are not allowed")))
        })
});

impl Visitor<dyn Toy> for BallHater {
    type Intention = Content;

    fn dispatch(
        &mut self,
        phase: Phase,
        ty: &'static Type,
        node: &(dyn Toy + 'static),
        context: Context<'_, Content>,
    ) -> Result<()> {
        BALL_HATER.dispatch(self, phase, ty, node, context)
    }
}

#[test]
fn test_handler_error_propagates_to_top_level_accept() {
    let mut hater = BallHater {
        visited: Vec::new(),
    };
    let err = toy_chest().accept(&mut hater).unwrap_err();

    assert!(matches!(err, VisitError::Custom(_)));
    assert_eq!(err.to_string(), "balls are not allowed");
    // The ball itself was reached through its Toy handler; nothing after it was.
    assert_eq!(hater.visited.last().unwrap(), "A small red ball");
    assert!(!hater.visited.iter().any(|toy| toy.contains("green")));
}

// ============================================================================
// Generic trace visitor
// ============================================================================

#[test]
fn test_trace_visitor_over_toy_chest() {
    let mut tracer = provide_trace_visitor::<Content>();
    toy_chest().accept(&mut tracer).unwrap();

    assert_eq!(tracer.depth(), 0);
    let lines = tracer.lines();
    assert_eq!(lines[0], "enter_Toy [neutral]");
    assert!(lines.contains(&"  enter_SpecialBox [content]".to_string()));
    assert!(lines.contains(&"    visit_ArtBook [neutral]".to_string()));
    assert_eq!(lines.last().unwrap(), "exit_Toy [neutral]");
}
