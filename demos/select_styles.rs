use std::error::Error;
use std::sync::Arc;

use styleset::base::capabilities::{PageCapabilities, RenderingEngine};
use styleset::dom::memory::{MemoryCookieJar, MemoryDocument};
use styleset::selector::config::SelectorConfig;
use styleset::selector::switcher::StyleSheetSelector;

fn themed_page(jar: MemoryCookieJar) -> Arc<MemoryDocument> {
    let document = Arc::new(MemoryDocument::with_jar(jar));
    document.add_link("stylesheet", "", false); // persistent base styles
    document.add_link("stylesheet", "day", false);
    document.add_link("alternate stylesheet", "night", true);
    document.add_link("alternate stylesheet", "high contrast", true);
    document
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = SelectorConfig::builder()
        .cookie_name("site_theme")
        .expiry_days(90)
        .path("/")
        .build()?;
    let capabilities = PageCapabilities::for_engine(RenderingEngine::Blink);
    let jar = MemoryCookieJar::new();

    println!("--- Step 1: First visit ---");
    let page = themed_page(jar.clone());
    let selector = StyleSheetSelector::new(page, &capabilities, config.clone());
    selector.on_ready();
    println!("Available themes: {:?}", selector.registry().titles());
    println!("Active on arrival: {:?}", selector.registry().active_title());

    println!("\n--- Step 2: Visitor picks a theme ---");
    selector.registry().select("night");
    println!("Active now: {:?}", selector.registry().active_title());
    selector.on_teardown();
    println!("Jar after teardown: {:?}", jar.serialize_live());

    println!("\n--- Step 3: Next page on the same site ---");
    let page = themed_page(jar.clone());
    let selector = StyleSheetSelector::new(page, &capabilities, config);
    selector.on_ready();
    println!("Restored theme: {:?}", selector.registry().active_title());

    println!("\n--- Step 4: Forget the preference ---");
    selector.forget();
    println!("Jar after forget: {:?}", jar.serialize_live());

    Ok(())
}
