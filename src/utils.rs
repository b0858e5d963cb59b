use std::panic;
use std::sync::Once;

// A panic inside the guest ends in a wasm trap that the host only sees
// as an unreachable instruction, so send the message to the host log first.
pub fn set_panic_hook(sink: fn(&str)) {
    static SET_HOOK: Once = Once::new();
    SET_HOOK.call_once(|| {
        panic::set_hook(Box::new(move |info| {
            sink(&format!("panic: {}", info));
        }));
    });
}
