use serde_json::json;

use yamsync::error::Error;
use yamsync::types::{
    ApiErrorBody, ApiResponse, DownloadDescriptor, IntOrString, Playlist, PlaylistTrackRef,
};
use yamsync::yandex::client::{api_error, decode_body};
use yamsync::yandex::playlists::PlaylistDiff;
use yamsync::yandex::tracks::{media_url, sign};

const DESCRIPTOR_XML: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
<download-info>\
<host>mp3.example.net</host>\
<path>/a/b/track.mp3</path>\
<ts>0005dd</ts>\
<region>ru</region>\
<s>saltsalt</s>\
</download-info>";

#[test]
fn test_decode_json_envelope() {
    let body = r#"{
        "invocationInfo": {"hostname": "h", "req-id": "r-1", "exec-duration-millis": 5},
        "result": {"uid": 42, "kind": 3, "revision": 7, "title": "Likes", "trackCount": 2}
    }"#;

    let envelope: ApiResponse<Playlist> = decode_body(body.as_bytes()).unwrap();
    assert_eq!(envelope.invocation_info.hostname, "h");
    assert_eq!(
        envelope.invocation_info.exec_duration_millis,
        Some(IntOrString::Int(5))
    );
    assert_eq!(envelope.result.kind, 3);
    assert_eq!(envelope.result.revision, 7);
    assert_eq!(envelope.result.title, "Likes");
}

#[test]
fn test_decode_exec_duration_as_string() {
    // The server sometimes sends the duration as a string; both shapes
    // must normalize into the same field.
    let body = r#"{"invocationInfo": {"exec-duration-millis": "12"}, "result": {}}"#;

    let envelope: ApiResponse<Playlist> = decode_body(body.as_bytes()).unwrap();
    assert_eq!(
        envelope.invocation_info.exec_duration_millis,
        Some(IntOrString::Str("12".to_string()))
    );
}

#[test]
fn test_decode_xml_fallback() {
    // Valid XML, invalid JSON: must decode through the XML path.
    let descriptor: DownloadDescriptor = decode_body(DESCRIPTOR_XML.as_bytes()).unwrap();
    assert_eq!(descriptor.host, "mp3.example.net");
    assert_eq!(descriptor.path, "/a/b/track.mp3");
    assert_eq!(descriptor.ts, "0005dd");
    assert_eq!(descriptor.s, "saltsalt");
    assert_eq!(descriptor.region.as_deref(), Some("ru"));
}

#[test]
fn test_decode_neither_json_nor_xml() {
    let raw = b"not json <<>> not xml";
    let err = decode_body::<DownloadDescriptor>(raw).unwrap_err();
    match err {
        Error::Decode { payload } => assert!(payload.contains("not json")),
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[test]
fn test_decode_empty_body_is_not_an_error() {
    let descriptor: DownloadDescriptor = decode_body(b"").unwrap();
    assert!(descriptor.host.is_empty());

    let descriptor: DownloadDescriptor = decode_body(b"  \n").unwrap();
    assert!(descriptor.host.is_empty());
}

#[test]
fn test_api_error_mapping() {
    let conflict = api_error(ApiErrorBody {
        name: "wrong-revision".to_string(),
        message: "revision 4 is stale".to_string(),
    });
    assert!(conflict.is_conflict());
    assert!(conflict.to_string().contains("revision 4 is stale"));

    let other = api_error(ApiErrorBody {
        name: "not-found".to_string(),
        message: "no such playlist".to_string(),
    });
    assert!(!other.is_conflict());
    match other {
        Error::Api { name, message } => {
            assert_eq!(name, "not-found");
            assert_eq!(message, "no such playlist");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_sign_is_deterministic() {
    let first = sign("/a/track.mp3", "salt");
    let second = sign("/a/track.mp3", "salt");
    assert_eq!(first, second);

    // 16 MD5 bytes as lowercase hex
    assert_eq!(first.len(), 32);
    assert!(
        first
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    );
}

#[test]
fn test_sign_depends_on_both_inputs() {
    let base = sign("/a/track.mp3", "salt");
    assert_ne!(base, sign("/b/track.mp3", "salt"));
    assert_ne!(base, sign("/a/track.mp3", "other"));
}

#[test]
fn test_sign_strips_leading_separator() {
    assert_eq!(sign("/a/track.mp3", "salt"), sign("a/track.mp3", "salt"));
}

#[test]
fn test_media_url_assembly() {
    let descriptor = DownloadDescriptor {
        host: "mp3.example.net".to_string(),
        path: "/a/track.mp3".to_string(),
        ts: "0005dd".to_string(),
        region: None,
        s: "saltsalt".to_string(),
    };

    let url = media_url(&descriptor).unwrap();
    let digest = sign("/a/track.mp3", "saltsalt");
    assert_eq!(
        url,
        format!("https://mp3.example.net/get-mp3/{digest}/0005dd/a/track.mp3")
    );
}

#[test]
fn test_media_url_empty_path() {
    let descriptor = DownloadDescriptor {
        host: "mp3.example.net".to_string(),
        ..Default::default()
    };
    assert!(matches!(media_url(&descriptor), Err(Error::EmptyPath)));
}

#[test]
fn test_media_url_missing_descriptor() {
    // An empty response body decodes to a default descriptor; that must
    // surface as a missing descriptor, not as an empty path.
    let descriptor = DownloadDescriptor::default();
    assert!(matches!(
        media_url(&descriptor),
        Err(Error::MissingDescriptor)
    ));
}

#[test]
fn test_insert_diff_shape() {
    let tracks = [PlaylistTrackRef {
        id: 42,
        album_id: 100,
    }];
    let diff = [PlaylistDiff::Insert {
        at: 0,
        tracks: &tracks,
    }];

    assert_eq!(
        serde_json::to_value(&diff).unwrap(),
        json!([{"op": "insert", "at": 0, "tracks": [{"id": 42, "albumId": 100}]}])
    );
}

#[test]
fn test_delete_diff_shape() {
    let tracks = [
        PlaylistTrackRef {
            id: 42,
            album_id: 100,
        },
        PlaylistTrackRef {
            id: 43,
            album_id: 101,
        },
    ];
    let diff = [PlaylistDiff::Delete {
        from: 0,
        to: tracks.len(),
        tracks: &tracks,
    }];

    assert_eq!(
        serde_json::to_value(&diff).unwrap(),
        json!([{
            "op": "delete",
            "from": 0,
            "to": 2,
            "tracks": [{"id": 42, "albumId": 100}, {"id": 43, "albumId": 101}]
        }])
    );
}
