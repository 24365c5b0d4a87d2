//! Decoder state-machine checks: determinism, frame reset, completion.

use ir_logger::{CommandDecoder, FRAME_BITS, KEY_PLAY, Pulse};

/// Feed a sequence and return the decoder afterwards.
fn replay(pulses: &[Pulse]) -> CommandDecoder {
    let mut decoder = CommandDecoder::new();
    for &pulse in pulses {
        decoder.feed(pulse);
    }
    decoder
}

/// The 16 pulses encoding `word`, least-significant bit first.
fn frame_pulses(word: u16) -> Vec<Pulse> {
    (0..FRAME_BITS)
        .map(|bit| {
            if word & (1 << bit) != 0 {
                Pulse::High
            } else {
                Pulse::Low
            }
        })
        .collect()
}

#[test]
fn short_pulses_change_nothing() {
    let decoder = replay(&[Pulse::Short; 16]);
    assert_eq!(decoder.accumulator(), 0);
    assert_eq!(decoder.bit_position(), 0);
    assert_eq!(decoder.command(), 0);
}

#[test]
fn high_sets_the_current_bit_low_advances_past_it() {
    let decoder = replay(&[Pulse::High, Pulse::Low, Pulse::High]);
    assert_eq!(decoder.accumulator(), 0b101);
    assert_eq!(decoder.bit_position(), 3);
}

#[test]
fn long_resets_at_any_bit_position() {
    for prefix_len in 0..15 {
        let mut pulses = vec![Pulse::High; prefix_len];
        pulses.push(Pulse::Long);
        let decoder = replay(&pulses);
        assert_eq!(decoder.accumulator(), 0, "prefix {prefix_len}");
        assert_eq!(decoder.bit_position(), 0, "prefix {prefix_len}");
    }
}

#[test]
fn sixteen_one_bits_complete_as_0xffff() {
    let mut decoder = CommandDecoder::new();
    decoder.feed(Pulse::Long);
    let mut completed = None;
    for _ in 0..FRAME_BITS {
        completed = decoder.feed(Pulse::High);
    }
    assert_eq!(completed, Some(0xFFFF));
    assert_eq!(decoder.command(), 0xFFFF);
    assert_eq!(decoder.bit_position(), 0);
}

#[test]
fn exactly_one_command_per_sixteen_counted_symbols() {
    let mut decoder = CommandDecoder::new();
    let mut completions = 0;
    for i in 0..40 {
        let pulse = if i % 2 == 0 { Pulse::High } else { Pulse::Low };
        if decoder.feed(pulse).is_some() {
            completions += 1;
        }
    }
    assert_eq!(completions, 2);
    assert_eq!(decoder.bit_position(), 8);
}

#[test]
fn key_play_frame_decodes_to_the_constant() {
    let mut pulses = vec![Pulse::Long];
    pulses.extend(frame_pulses(KEY_PLAY));
    let decoder = replay(&pulses);
    assert_eq!(decoder.command(), KEY_PLAY);
}

#[test]
fn command_is_retained_until_the_next_frame_completes() {
    let mut pulses = vec![Pulse::Long];
    pulses.extend(frame_pulses(KEY_PLAY));
    // A partial follow-up frame must not disturb the published command.
    pulses.extend([Pulse::Long, Pulse::High, Pulse::Low]);
    assert_eq!(replay(&pulses).command(), KEY_PLAY);

    // The next completed frame overwrites it.
    let mut pulses = vec![Pulse::Long];
    pulses.extend(frame_pulses(KEY_PLAY));
    pulses.push(Pulse::Long);
    pulses.extend(frame_pulses(0xABCD));
    assert_eq!(replay(&pulses).command(), 0xABCD);
}

#[test]
fn decoding_is_a_pure_function_of_the_sequence() {
    let sequence = [
        Pulse::Long,
        Pulse::High,
        Pulse::Short,
        Pulse::Low,
        Pulse::High,
        Pulse::Long,
        Pulse::Low,
        Pulse::High,
        Pulse::Short,
    ];
    let first = replay(&sequence);
    let second = replay(&sequence);
    assert_eq!(first.accumulator(), second.accumulator());
    assert_eq!(first.bit_position(), second.bit_position());
    assert_eq!(first.command(), second.command());
}
