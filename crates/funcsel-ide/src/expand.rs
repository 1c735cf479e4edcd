//! The expansion state machine.
//!
//! One expansion step widens a region to the nearest enclosing function
//! construct it does not already cover. Per function there are two visible
//! levels: the signature span (the whole function, `function`/parameters
//! through the closing brace) and the declaration span (the signature plus
//! an enclosing `var x =` / `key:` construct and trailing terminator). A
//! region already at the declaration level climbs to the next outer
//! function; non-function braces (`if` blocks, object literals) are
//! transparent. A region with no enclosing function is left unchanged.

use text_size::TextSize;

use funcsel_syntax::boundary::locate;
use funcsel_syntax::braces::{enclosing_pair, BracePair};
use funcsel_syntax::lexer::{lex, Token};

use crate::region::Region;

/// Applies one expansion step to every region independently.
///
/// The result has exactly one output region per input region, in order;
/// overlapping results are not merged. Regions at top-level scope come back
/// unchanged.
#[must_use]
pub fn expand_once(source: &str, regions: &[Region]) -> Vec<Region> {
    let tokens = lex(source);
    regions
        .iter()
        .map(|region| expand_region(source, &tokens, *region))
        .collect()
}

fn expand_region(source: &str, tokens: &[Token], region: Region) -> Region {
    let mut probe = probe_offset(region);
    loop {
        let Some(pair) = enclosing_pair(tokens, probe) else {
            return region;
        };

        let Some(boundary) = locate(source, tokens, pair) else {
            // Not a function body; the braces are transparent.
            match step_out(pair) {
                Some(outer) => {
                    probe = outer;
                    continue;
                }
                None => return region,
            }
        };

        let range = region.range();
        if range == boundary.declaration {
            // Fully expanded here; climb to the next enclosing function.
            match step_out(pair) {
                Some(outer) => {
                    probe = outer;
                    continue;
                }
                None => return region,
            }
        }

        let next = if range == pair.interior() || range == boundary.signature {
            boundary.declaration
        } else {
            boundary.signature
        };

        // Growth must be monotonic; a candidate that does not cover the
        // region (it straddles this function's boundary) is skipped in
        // favor of something further out.
        if next != range && next.contains_range(range) {
            tracing::trace!(from = ?range, to = ?next, "expanded region");
            return region.with_range(next);
        }
        match step_out(pair) {
            Some(outer) => probe = outer,
            None => return region,
        }
    }
}

/// The offset the outward search starts from: the last offset the region
/// covers, or the caret itself for an empty region. Using the last covered
/// offset keeps a region that ends on a closing brace attached to that
/// brace's own pair.
fn probe_offset(region: Region) -> TextSize {
    if region.is_empty() {
        region.active()
    } else {
        region.end() - TextSize::from(1)
    }
}

/// The search point just outside a pair's opening brace, or `None` at the
/// start of input.
fn step_out(pair: BracePair) -> Option<TextSize> {
    (pair.open > TextSize::from(0)).then(|| pair.open - TextSize::from(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_at(source: &str, cursor: &str) -> Region {
        Region::cursor(TextSize::from(source.find(cursor).expect("cursor") as u32))
    }

    fn selected_text<'a>(source: &'a str, region: &Region) -> &'a str {
        &source[usize::from(region.start())..usize::from(region.end())]
    }

    fn expand_one(source: &str, region: Region) -> Region {
        expand_once(source, &[region])[0]
    }

    #[test]
    fn first_step_selects_the_whole_function() {
        let source = "var foobar = function() {\n  alert('Example!')\n}\n;";
        let step1 = expand_one(source, cursor_at(source, "alert"));
        assert_eq!(
            selected_text(source, &step1),
            "function() {\n  alert('Example!')\n}"
        );
    }

    #[test]
    fn second_step_selects_the_declaration() {
        let source = "var foobar = function() {\n  alert('Example!')\n}\n;";
        let step1 = expand_one(source, cursor_at(source, "alert"));
        let step2 = expand_one(source, step1);
        assert_eq!(
            selected_text(source, &step2),
            "var foobar = function() {\n  alert('Example!')\n}\n;"
        );
    }

    #[test]
    fn arrow_function_two_steps() {
        let source = "const f = () => {\n  return 1;\n};";
        let step1 = expand_one(source, cursor_at(source, "return"));
        assert_eq!(selected_text(source, &step1), "() => {\n  return 1;\n}");
        let step2 = expand_one(source, step1);
        assert_eq!(
            selected_text(source, &step2),
            "const f = () => {\n  return 1;\n};"
        );
    }

    #[test]
    fn top_level_cursor_is_a_no_op() {
        let source = "var x = 1;\nvar y = 2;\n";
        let region = cursor_at(source, "y");
        assert_eq!(expand_one(source, region), region);
        // And stays one on repeat.
        assert_eq!(expand_one(source, expand_one(source, region)), region);
    }

    #[test]
    fn string_brace_does_not_end_the_body() {
        let source = "function f(){ var s = \"}\"; return 1; }";
        let step1 = expand_one(source, cursor_at(source, "var s"));
        assert_eq!(selected_text(source, &step1), source);
    }

    #[test]
    fn non_function_braces_are_transparent() {
        let source = "function f() { if (x) { y(); } }";
        let step1 = expand_one(source, cursor_at(source, "y()"));
        assert_eq!(selected_text(source, &step1), source);
    }

    #[test]
    fn nested_functions_climb_outward() {
        let source = "\
var outer = function () {
  if (ready) {
    var inner = function () {
      go();
    };
  }
};";
        let step1 = expand_one(source, cursor_at(source, "go"));
        assert_eq!(
            selected_text(source, &step1),
            "function () {\n      go();\n    }"
        );

        let step2 = expand_one(source, step1);
        assert_eq!(
            selected_text(source, &step2),
            "var inner = function () {\n      go();\n    };"
        );

        // The `if` block is skipped; the next stop is the outer function.
        let step3 = expand_one(source, step2);
        assert_eq!(
            selected_text(source, &step3),
            "function () {\n  if (ready) {\n    var inner = function () {\n      go();\n    };\n  }\n}"
        );

        let step4 = expand_one(source, step3);
        assert_eq!(selected_text(source, &step4), source);

        // Outermost declaration reached; nothing further to select.
        assert_eq!(expand_one(source, step4), step4);
    }

    #[test]
    fn growth_is_monotonic() {
        let source = "var f = function () { g(function () { h(); }); };";
        let mut region = cursor_at(source, "h()");
        for _ in 0..6 {
            let wider = expand_one(source, region);
            assert!(wider.contains(&region));
            region = wider;
        }
    }

    #[test]
    fn body_interior_selection_goes_to_declaration() {
        let source = "var f = function () { go(); };";
        let open = source.find('{').expect("open") as u32;
        let close = source.rfind('}').expect("close") as u32;
        let interior = Region::new(TextSize::from(open + 1), TextSize::from(close));
        let next = expand_one(source, interior);
        assert_eq!(selected_text(source, &next), source);
    }

    #[test]
    fn direction_is_preserved() {
        let source = "var f = function () { go(); };";
        let offset = TextSize::from(source.find("go").expect("cursor") as u32);
        let reversed = Region::new(offset + TextSize::from(2), offset);
        let next = expand_one(source, reversed);
        assert!(next.is_reversed());
    }

    #[test]
    fn regions_expand_independently() {
        let source = "var a = function () { x(); };\nvar b = function () { y(); };";
        let regions = [cursor_at(source, "x()"), cursor_at(source, "y()")];
        let expanded = expand_once(source, &regions);
        assert_eq!(expanded.len(), 2);
        assert_eq!(selected_text(source, &expanded[0]), "function () { x(); }");
        assert_eq!(selected_text(source, &expanded[1]), "function () { y(); }");
    }

    #[test]
    fn overlapping_results_stay_separate() {
        let source = "var f = function () { a(); b(); };";
        let regions = [cursor_at(source, "a()"), cursor_at(source, "b()")];
        let expanded = expand_once(source, &regions);
        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[0].range(), expanded[1].range());
    }

    #[test]
    fn cursor_on_open_brace_expands_its_own_function() {
        let source = "var f = function () { go(); };";
        let open = TextSize::from(source.find('{').expect("open") as u32);
        let next = expand_one(source, Region::cursor(open));
        assert_eq!(selected_text(source, &next), "function () { go(); }");
    }
}
