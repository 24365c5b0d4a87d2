//! Known-command table checks.

use ir_logger::{KEY_FORWARD, KEY_PLAY, KEY_REWIND, KEY_STOP, label};

#[test]
fn known_commands_map_to_their_labels() {
    assert_eq!(label(KEY_FORWARD), b"rew\n");
    assert_eq!(label(KEY_REWIND), b"ffd\n");
    assert_eq!(label(KEY_PLAY), b"ply\n");
    assert_eq!(label(KEY_STOP), b"stp\n");
}

#[test]
fn everything_else_maps_to_the_default() {
    assert_eq!(label(0), b"non\n");
    assert_eq!(label(0xFFFF), b"non\n");
    assert_eq!(label(KEY_PLAY ^ 1), b"non\n");
}

#[test]
fn key_constants_are_distinct() {
    let keys = [KEY_FORWARD, KEY_REWIND, KEY_PLAY, KEY_STOP];
    for (i, a) in keys.iter().enumerate() {
        for b in keys.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
