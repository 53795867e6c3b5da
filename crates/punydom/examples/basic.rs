//! Example: Build a small page and print it

use std::rc::Rc;

use punydom::puny_dom::{DomTree, Event, EventHandler, NodeId};
use punydom::{PunyDom, Settings};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = Settings::new("https://example.com/").with_user_agent("PunyDOM-Demo/0.1");
    let mut dom = PunyDom::new(settings);
    let window = dom.window()?;
    let document = window.document();

    window.console().log(&[&"navigator:", &window.navigator().user_agent]);

    let tree = window.tree_mut();
    let body = tree
        .body(document)
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;

    let list = tree.create_element("ul");
    tree.set_id(list, "items");
    tree.append_child(body, list)?;

    for label in ["one", "two", "three"] {
        let item = tree.create_element("li");
        tree.class_list(item).add(&["item", label]);
        let text = tree.create_text_node(label);
        tree.append_child(item, text)?;
        tree.append_child(list, item)?;
    }

    let on_click: EventHandler = Rc::new(|tree: &mut DomTree, target: NodeId| {
        tree.class_list(target).toggle("clicked", None);
    });
    tree.add_event_listener(list, "click", on_click);
    tree.dispatch_event(list, &Event::new("click"));

    println!("{}", tree.to_html(document));
    println!("location: {}", window.location());
    Ok(())
}
