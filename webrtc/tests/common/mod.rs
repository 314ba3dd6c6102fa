#![allow(dead_code)]

/// Offer produced by a desktop browser: bundled audio and video with the
/// usual H264/VP8/AV1 set, RTX, RED and ULPFEC.
pub const BROWSER_OFFER: &str = "v=0\r
o=- 4097551137405824264 2 IN IP4 127.0.0.1\r
s=-\r
t=0 0\r
a=group:BUNDLE 0 1\r
a=extmap-allow-mixed\r
a=msid-semantic: WMS\r
m=audio 9 UDP/TLS/RTP/SAVPF 111 63 9 102 0 8 13 110 126\r
c=IN IP4 0.0.0.0\r
a=rtcp:9 IN IP4 0.0.0.0\r
a=ice-ufrag:NNAX\r
a=ice-pwd:vgbea/8i5IRRp6JfEhWl/nEH\r
a=ice-options:trickle renomination\r
a=fingerprint:sha-256 9A:22:54:46:4D:73:E7:28:57:BE:61:52:D1:D0:DE:4D:80:A4:F4:99:15:4F:9C:A7:57:6F:01:B5:5A:4C:91:C0\r
a=setup:actpass\r
a=mid:0\r
a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\r
a=extmap:2 http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time\r
a=extmap:3 http://www.ietf.org/id/draft-holmer-rmcat-transport-wide-cc-extensions-01\r
a=extmap:4 urn:ietf:params:rtp-hdrext:sdes:mid\r
a=sendrecv\r
a=msid:- 1dff25fe-2f6d-4f78-a300-830d3fccb841\r
a=rtcp-mux\r
a=rtcp-rsize\r
a=rtpmap:111 opus/48000/2\r
a=rtcp-fb:111 transport-cc\r
a=fmtp:111 minptime=10;useinbandfec=1\r
a=rtpmap:63 red/48000/2\r
a=fmtp:63 111/111\r
a=rtpmap:9 G722/8000\r
a=rtpmap:102 ILBC/8000\r
a=rtpmap:0 PCMU/8000\r
a=rtpmap:8 PCMA/8000\r
a=rtpmap:13 CN/8000\r
a=rtpmap:110 telephone-event/48000\r
a=rtpmap:126 telephone-event/8000\r
a=ssrc:931888593 cname:CQU+W9bQppVgBCXd\r
a=ssrc:931888593 msid:- 1dff25fe-2f6d-4f78-a300-830d3fccb841\r
m=video 9 UDP/TLS/RTP/SAVPF 96 97 98 99 100 101 35 36 127 103 104\r
c=IN IP4 0.0.0.0\r
a=rtcp:9 IN IP4 0.0.0.0\r
a=ice-ufrag:NNAX\r
a=ice-pwd:vgbea/8i5IRRp6JfEhWl/nEH\r
a=ice-options:trickle renomination\r
a=fingerprint:sha-256 9A:22:54:46:4D:73:E7:28:57:BE:61:52:D1:D0:DE:4D:80:A4:F4:99:15:4F:9C:A7:57:6F:01:B5:5A:4C:91:C0\r
a=setup:actpass\r
a=mid:1\r
a=extmap:14 urn:ietf:params:rtp-hdrext:toffset\r
a=extmap:2 http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time\r
a=extmap:13 urn:3gpp:video-orientation\r
a=extmap:3 http://www.ietf.org/id/draft-holmer-rmcat-transport-wide-cc-extensions-01\r
a=extmap:5 http://www.webrtc.org/experiments/rtp-hdrext/playout-delay\r
a=extmap:4 urn:ietf:params:rtp-hdrext:sdes:mid\r
a=extmap:10 urn:ietf:params:rtp-hdrext:sdes:rtp-stream-id\r
a=extmap:11 urn:ietf:params:rtp-hdrext:sdes:repaired-rtp-stream-id\r
a=sendrecv\r
a=msid:- e4435e4b-cd40-479f-aadd-df59df2be870\r
a=rtcp-mux\r
a=rtcp-rsize\r
a=rtpmap:96 H264/90000\r
a=rtcp-fb:96 goog-remb\r
a=rtcp-fb:96 transport-cc\r
a=rtcp-fb:96 ccm fir\r
a=rtcp-fb:96 nack\r
a=rtcp-fb:96 nack pli\r
a=fmtp:96 level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=640c1f\r
a=rtpmap:97 rtx/90000\r
a=fmtp:97 apt=96\r
a=rtpmap:98 H264/90000\r
a=rtcp-fb:98 goog-remb\r
a=rtcp-fb:98 transport-cc\r
a=rtcp-fb:98 ccm fir\r
a=rtcp-fb:98 nack\r
a=rtcp-fb:98 nack pli\r
a=fmtp:98 level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=42e01f\r
a=rtpmap:99 rtx/90000\r
a=fmtp:99 apt=98\r
a=rtpmap:100 VP8/90000\r
a=rtcp-fb:100 goog-remb\r
a=rtcp-fb:100 transport-cc\r
a=rtcp-fb:100 ccm fir\r
a=rtcp-fb:100 nack\r
a=rtcp-fb:100 nack pli\r
a=rtpmap:101 rtx/90000\r
a=fmtp:101 apt=100\r
a=rtpmap:35 AV1/90000\r
a=rtcp-fb:35 goog-remb\r
a=rtcp-fb:35 transport-cc\r
a=rtcp-fb:35 ccm fir\r
a=rtcp-fb:35 nack\r
a=rtcp-fb:35 nack pli\r
a=rtpmap:36 rtx/90000\r
a=fmtp:36 apt=35\r
a=rtpmap:127 red/90000\r
a=rtpmap:103 rtx/90000\r
a=fmtp:103 apt=127\r
a=rtpmap:104 ulpfec/90000\r
a=ssrc-group:FID 1779838353 1564090782\r
a=ssrc:1779838353 cname:CQU+W9bQppVgBCXd\r
a=ssrc:1779838353 msid:- e4435e4b-cd40-479f-aadd-df59df2be870\r
a=ssrc:1564090782 cname:CQU+W9bQppVgBCXd\r
a=ssrc:1564090782 msid:- e4435e4b-cd40-479f-aadd-df59df2be870\r
";

/// The same kind of offer with every line already in the order the writer
/// emits them.
pub const ORDERED_OFFER: &str = "v=0\r
o=- 4097551137405824264 2 IN IP4 127.0.0.1\r
s=-\r
t=0 0\r
a=group:BUNDLE 0 1\r
a=extmap-allow-mixed\r
a=msid-semantic: WMS\r
m=audio 9 UDP/TLS/RTP/SAVPF 111 0\r
c=IN IP4 0.0.0.0\r
a=rtcp:9 IN IP4 0.0.0.0\r
a=ice-ufrag:NNAX\r
a=ice-pwd:vgbea/8i5IRRp6JfEhWl/nEH\r
a=ice-options:trickle renomination\r
a=fingerprint:sha-256 9A:22:54:46:4D:73:E7:28:57:BE:61:52:D1:D0:DE:4D:80:A4:F4:99:15:4F:9C:A7:57:6F:01:B5:5A:4C:91:C0\r
a=setup:actpass\r
a=mid:0\r
a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\r
a=extmap:4 urn:ietf:params:rtp-hdrext:sdes:mid\r
a=sendrecv\r
a=msid:- 1dff25fe-2f6d-4f78-a300-830d3fccb841\r
a=rtcp-mux\r
a=rtcp-rsize\r
a=rtpmap:111 opus/48000/2\r
a=rtpmap:0 PCMU/8000\r
a=rtcp-fb:111 transport-cc\r
a=fmtp:111 minptime=10;useinbandfec=1\r
a=ssrc:931888593 cname:CQU+W9bQppVgBCXd\r
a=ssrc:931888593 msid:- 1dff25fe-2f6d-4f78-a300-830d3fccb841\r
m=video 9 UDP/TLS/RTP/SAVPF 96 97\r
c=IN IP4 0.0.0.0\r
a=rtcp:9 IN IP4 0.0.0.0\r
a=mid:1\r
a=extmap:13/sendonly urn:3gpp:video-orientation\r
a=recvonly\r
a=rtcp-mux\r
a=rtpmap:96 H264/90000\r
a=rtpmap:97 rtx/90000\r
a=rtcp-fb:* trr-int 100\r
a=rtcp-fb:96 ccm fir\r
a=rtcp-fb:96 nack\r
a=fmtp:96 level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=42e01f\r
a=fmtp:97 apt=96\r
a=candidate:1467250027 1 udp 2122260223 192.168.0.196 46243 typ host generation 0\r
a=candidate:435653019 1 tcp 1845501695 192.168.0.196 9 typ srflx raddr 1.2.3.4 rport 9 tcptype active generation 0\r
a=end-of-candidates\r
a=ssrc-group:FID 1779838353 1564090782\r
a=ssrc:1779838353 cname:CQU+W9bQppVgBCXd\r
";

/// Answer from an SFU: Opus, H264 with RTX and VP8 with RTX.
pub const SFU_ANSWER: &str = "v=0\r
o=- 10000 2 IN IP4 203.0.113.10\r
s=-\r
t=0 0\r
a=ice-lite\r
m=audio 7000 UDP/TLS/RTP/SAVPF 111\r
c=IN IP4 203.0.113.10\r
a=mid:0\r
a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\r
a=recvonly\r
a=rtcp-mux\r
a=rtpmap:111 opus/48000/2\r
a=rtcp-fb:111 transport-cc\r
a=fmtp:111 minptime=10;useinbandfec=1\r
m=video 7000 UDP/TLS/RTP/SAVPF 96 97 100 101\r
c=IN IP4 203.0.113.10\r
a=mid:1\r
a=extmap:4 urn:ietf:params:rtp-hdrext:sdes:mid\r
a=extmap:12/recvonly urn:3gpp:video-orientation\r
a=recvonly\r
a=rtcp-mux\r
a=rtpmap:96 H264/90000\r
a=rtpmap:97 rtx/90000\r
a=rtpmap:100 VP8/90000\r
a=rtpmap:101 rtx/90000\r
a=rtcp-fb:96 nack\r
a=rtcp-fb:96 nack pli\r
a=rtcp-fb:96 transport-cc\r
a=rtcp-fb:100 nack\r
a=rtcp-fb:100 goog-remb\r
a=fmtp:96 level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=42e01f\r
a=fmtp:97 apt=96\r
a=fmtp:101 apt=100\r
";

/// Minimal video description with a single H264 codec and its RTX.
pub fn h264_offer(payload_type: u8, rtx_payload_type: u8, fmtp: &str) -> String {
    format!(
        "v=0\r\n\
o=- 1 1 IN IP4 127.0.0.1\r\n\
s=-\r\n\
t=0 0\r\n\
m=video 9 UDP/TLS/RTP/SAVPF {pt} {rtx}\r\n\
a=rtpmap:{pt} H264/90000\r\n\
a=rtpmap:{rtx} rtx/90000\r\n\
a=rtcp-fb:{pt} nack\r\n\
a=fmtp:{pt} {fmtp}\r\n\
a=fmtp:{rtx} apt={pt}\r\n",
        pt = payload_type,
        rtx = rtx_payload_type,
        fmtp = fmtp,
    )
}
