//! Minimal polling loop over an in-memory link.
//!
//! Feeds a noisy byte stream through the decoder and prints each decoded
//! payload plus the acks the decoder wrote back.

use bytes::BytesMut;
use serlink_frame::{encode_frame, FrameConfig, FrameDecoder};
use serlink_transport::MemoryTransport;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let config = FrameConfig::new(3);

    // Line noise, a corrupt frame, then two good ones.
    let mut line = vec![0x00, 0xDE, 0xAD];
    let mut frame = BytesMut::new();
    encode_frame(&config, &[1, 2, 3], &mut frame).unwrap();
    let mut corrupt = frame.to_vec();
    corrupt[4] ^= 0x01;
    line.extend(&corrupt);
    line.extend(&frame);
    frame.clear();
    encode_frame(&config, &[40, 50, 60], &mut frame).unwrap();
    line.extend(&frame);

    let mut transport = MemoryTransport::new();
    transport.feed(&line);
    let mut decoder = FrameDecoder::with_config(transport, config);

    for poll in 1..=6 {
        if decoder.poll() {
            println!(
                "poll {poll}: payload [{}, {}, {}]",
                decoder.byte_at(0),
                decoder.byte_at(1),
                decoder.byte_at(2)
            );
        } else {
            println!("poll {poll}: nothing decoded");
        }
    }

    println!("acks on the wire: {:02X?}", decoder.get_ref().sent());
}
