//! Markup rendering
//!
//! Pure functions from store state to markup strings. Every render
//! produces the complete list; callers replace the container content
//! wholesale, there is no diffing.

use crate::store::Store;
use crate::types::{Item, ItemId};

const ITEM_ID_ATTR: &str = "data-item-id=\"";

/// Render the list, dropping checked items when `hide_completed` is set
pub fn render(items: &[Item], hide_completed: bool) -> String {
    let visible: Vec<&Item> = items
        .iter()
        .filter(|item| !(hide_completed && item.is_checked()))
        .collect();

    tracing::debug!(
        total = items.len(),
        visible = visible.len(),
        hide_completed,
        "rendering shopping list"
    );

    visible.into_iter().map(render_item).collect()
}

pub fn render_store<G>(store: &Store<G>) -> String {
    render(store.items(), store.hide_completed())
}

/// Markup for one list entry
///
/// Only the `<li>` carries the id. The controls are resolved to their
/// item through it when clicked.
pub fn render_item(item: &Item) -> String {
    let checked_class = if item.is_checked() {
        " shopping-item__checked"
    } else {
        ""
    };

    let mut out = String::new();
    out.push_str("\n    <li ");
    out.push_str(ITEM_ID_ATTR);
    escape_into(&mut out, item.id().as_str());
    out.push_str("\">\n");
    out.push_str("      <span class=\"shopping-item js-shopping-item");
    out.push_str(checked_class);
    out.push_str("\">");
    escape_into(&mut out, item.name());
    out.push_str("</span>\n");
    out.push_str(concat!(
        "      <div class=\"shopping-item-controls\">\n",
        "        <button class=\"shopping-item-toggle js-item-toggle\">\n",
        "            <span class=\"button-label\">check</span>\n",
        "        </button>\n",
        "        <button class=\"shopping-item-delete js-item-delete\">\n",
        "            <span class=\"button-label\">delete</span>\n",
        "        </button>\n",
        "      </div>\n",
        "    </li>",
    ));
    out
}

/// Recover the item ids from rendered markup, in document order
pub fn parse_item_ids(markup: &str) -> Vec<ItemId> {
    let mut ids = Vec::new();
    let mut rest = markup;
    while let Some(start) = rest.find(ITEM_ID_ATTR) {
        rest = &rest[start + ITEM_ID_ATTR.len()..];
        let Some(end) = rest.find('"') else {
            break;
        };
        ids.push(ItemId::new(unescape(&rest[..end])));
        rest = &rest[end..];
    }
    ids
}

/// Full page: entry form, hide-completed control and the list container
pub fn render_page<G>(store: &Store<G>, title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>");
    escape_into(&mut out, title);
    out.push_str("</title>\n</head>\n<body>\n  <main class=\"container\">\n    <h1>");
    escape_into(&mut out, title);
    out.push_str(concat!(
        "</h1>\n",
        "    <form id=\"js-shopping-list-form\">\n",
        "      <label for=\"shopping-list-entry\">Add an item</label>\n",
        "      <input type=\"text\" name=\"shopping-list-entry\" class=\"js-shopping-list-entry\" placeholder=\"e.g., broccoli\">\n",
        "      <button type=\"submit\">Add item</button>\n",
        "    </form>\n",
        "    <button class=\"js-hide-completed-toggle\">",
    ));
    out.push_str(if store.hide_completed() {
        "Show completed"
    } else {
        "Hide completed"
    });
    out.push_str("</button>\n    <ul class=\"shopping-list js-shopping-list\">");
    out.push_str(&render_store(store));
    out.push_str("\n    </ul>\n  </main>\n</body>\n</html>\n");
    out
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

fn unescape(s: &str) -> String {
    const ENTITIES: [(&str, char); 4] = [("&lt;", '<'), ("&gt;", '>'), ("&quot;", '"'), ("&amp;", '&')];

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    'scan: while let Some(c) = rest.chars().next() {
        if c == '&' {
            for (entity, replacement) in ENTITIES {
                if let Some(tail) = rest.strip_prefix(entity) {
                    out.push(replacement);
                    rest = tail;
                    continue 'scan;
                }
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdSource;
    use crate::types::SeedItem;

    fn demo() -> Store {
        Store::demo(IdSource::sequential("item"))
    }

    fn fragments(markup: &str) -> usize {
        markup.matches("<li ").count()
    }

    #[test]
    fn test_render_shows_all_items_in_order() {
        let store = demo();
        let markup = render_store(&store);

        assert_eq!(fragments(&markup), 4);
        let apples = markup.find(">apples<").unwrap();
        let oranges = markup.find(">oranges<").unwrap();
        let milk = markup.find(">milk<").unwrap();
        let bread = markup.find(">bread<").unwrap();
        assert!(apples < oranges && oranges < milk && milk < bread);
    }

    #[test]
    fn test_render_marks_checked_items() {
        let store = demo();
        let markup = render_store(&store);

        assert_eq!(markup.matches("shopping-item__checked").count(), 1);
        assert!(markup.contains("js-shopping-item shopping-item__checked\">milk</span>"));
        assert!(markup.contains("class=\"shopping-item js-shopping-item\">apples</span>"));
    }

    #[test]
    fn test_render_hides_completed() {
        let store = demo();
        let markup = render(store.items(), true);

        assert_eq!(fragments(&markup), 3);
        assert!(!markup.contains(">milk<"));
        assert!(!markup.contains("shopping-item__checked"));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render(&[], false), "");
    }

    #[test]
    fn test_controls_carry_no_ids() {
        let store = demo();
        let markup = render_store(&store);

        // One id attribute per item, none on the buttons
        assert_eq!(markup.matches("data-item-id").count(), 4);
        for line in markup.lines().filter(|l| l.contains("<button")) {
            assert!(!line.contains("data-item-id"), "button leaked an id: {}", line);
        }
    }

    #[test]
    fn test_parse_item_ids_round_trip() {
        let store = demo();
        let ids = parse_item_ids(&render_store(&store));
        let expected: Vec<ItemId> = store.items().iter().map(|i| i.id().clone()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_names_are_escaped() {
        let store = Store::with_seed(
            IdSource::sequential("x"),
            &[SeedItem::new("<b>salt & \"pepper\"</b>", false)],
        );
        let markup = render_store(&store);

        assert!(markup.contains("&lt;b&gt;salt &amp; &quot;pepper&quot;&lt;/b&gt;"));
        assert!(!markup.contains("<b>"));
    }

    #[test]
    fn test_escaped_ids_round_trip() {
        let store = Store::with_seed(IdSource::sequential("a&\"b"), &[SeedItem::new("tea", false)]);
        let ids = parse_item_ids(&render_store(&store));
        assert_eq!(ids, vec![ItemId::new("a&\"b-1")]);
    }

    #[test]
    fn test_unescape_is_single_pass() {
        assert_eq!(unescape("&amp;quot;"), "&quot;");
        assert_eq!(unescape("a &amp b"), "a &amp b");
    }

    #[test]
    fn test_render_page_contains_controls_and_list() {
        let store = demo();
        let page = render_page(&store, "Shopping List");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("id=\"js-shopping-list-form\""));
        assert!(page.contains("class=\"js-shopping-list-entry\""));
        assert!(page.contains("class=\"js-hide-completed-toggle\">Hide completed"));
        assert!(page.contains("<ul class=\"shopping-list js-shopping-list\">"));
        assert_eq!(parse_item_ids(&page).len(), 4);
    }

    #[test]
    fn test_render_page_toggle_label_follows_filter() {
        let mut store = demo();
        store.set_hide_completed(true);
        let page = render_page(&store, "Groceries");

        assert!(page.contains(">Show completed</button>"));
        assert_eq!(parse_item_ids(&page).len(), 3);
    }
}
