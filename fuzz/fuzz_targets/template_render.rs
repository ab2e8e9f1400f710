#![no_main]

use libfuzzer_sys::fuzz_target;
use medir::template::MessageTemplate;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string (lossy inputs are skipped)
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic regardless of input
        let template = MessageTemplate::parse(input);

        // Rendering must either substitute or fail cleanly, never panic
        let vars = vec![
            ("a".to_string(), "1".to_string()),
            ("order_id".to_string(), "\"akbar\"".to_string()),
        ];
        let _ = template.render(&vars);
        let _ = template.render(&[]);
    }
});
