use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::io::{Cursor, Read};
use window_reader::WindowedReader;

fn random_content(rng: &mut impl RngCore, len: usize) -> Vec<u8> {
    let mut content = vec![0; len];
    rng.fill_bytes(&mut content);
    content
}

/// reads with varying buffer sizes until end of stream
fn drain<R: Read>(reader: &mut R, rng: &mut impl Rng) -> Vec<u8> {
    let mut output = Vec::new();
    loop {
        let mut buffer = vec![0; rng.random_range(1..32)];
        let bytes = reader.read(&mut buffer).unwrap();
        if bytes == 0 {
            return output;
        }
        output.extend_from_slice(&buffer[..bytes]);
    }
}

fn expected_window(content: &[u8], skip: u64, stop: u64) -> &[u8] {
    let end = if stop == 0 { content.len() } else { content.len().min(stop as usize) };
    let start = (skip as usize).min(end);
    &content[start..end]
}

#[test]
fn yields_exactly_the_window() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..500 {
        let len = rng.random_range(0..200);
        let content = random_content(&mut rng, len);
        let len = content.len() as u64;
        let skip = rng.random_range(0..=len);
        let stop = if rng.random_bool(0.3) { 0 } else { rng.random_range(skip.max(1)..=len + 50) };

        let mut reader = WindowedReader::sequential(&content[..], skip, stop);
        let output = drain(&mut reader, &mut rng);

        assert_eq!(output, expected_window(&content, skip, stop), "skip={skip} stop={stop}");
        let end = if stop == 0 { len } else { stop.min(len) };
        assert_eq!(reader.consumed(), end, "skip={skip} stop={stop}");
    }
}

#[test]
fn seeking_and_discarding_agree() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let len = rng.random_range(1..200);
        let content = random_content(&mut rng, len);
        let len = content.len() as u64;
        let skip = rng.random_range(0..len);
        let stop = if rng.random_bool(0.3) { 0 } else { rng.random_range(skip + 1..=len + 50) };

        let mut seeking = WindowedReader::positioned(Cursor::new(&content), skip, stop);
        let mut discarding = WindowedReader::sequential(Cursor::new(&content), skip, stop);
        let mut buffer_rng = StdRng::seed_from_u64(rng.next_u64());

        let seeked = drain(&mut seeking, &mut buffer_rng.clone());
        let discarded = drain(&mut discarding, &mut buffer_rng);

        assert_eq!(seeked, discarded, "skip={skip} stop={stop}");
        assert_eq!(seeking.consumed(), discarding.consumed(), "skip={skip} stop={stop}");
    }
}

#[test]
fn read_never_crosses_stop() {
    let content: Vec<u8> = (0..=255).collect();
    let mut reader = WindowedReader::positioned(Cursor::new(&content), 10, 100);

    let mut buffer = [0; 64];
    assert_eq!(reader.read(&mut buffer).unwrap(), 64);
    assert_eq!(reader.consumed(), 74);

    assert_eq!(reader.read(&mut buffer).unwrap(), 26);
    assert_eq!(&buffer[..26], &content[74..100]);
    assert_eq!(reader.consumed(), 100);

    assert_eq!(reader.read(&mut buffer).unwrap(), 0);
    assert_eq!(reader.consumed(), 100);
}

#[test]
fn read_to_end_through_boxed_source() {
    let content: Vec<u8> = (0..=255).collect();
    let source: Box<dyn window_reader::Source> = Box::new(Cursor::new(content.clone()));
    let mut reader = WindowedReader::new(source, 200, 0);

    let mut output = Vec::new();
    reader.read_to_end(&mut output).unwrap();
    assert_eq!(output, &content[200..]);
    assert_eq!(reader.consumed(), 256);
}
