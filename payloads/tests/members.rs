use payloads::{GroupMember, Role, StaticDirectory, filter_members};

fn demo_members() -> Vec<GroupMember> {
    futures::executor::block_on(async {
        use payloads::GroupDirectory;
        StaticDirectory::default()
            .fetch_members(payloads::DEFAULT_GROUP_SLUG)
            .await
            .found()
            .expect("demo group has members")
    })
}

fn names(members: &[&GroupMember]) -> Vec<String> {
    members.iter().map(|m| m.name.clone()).collect()
}

#[test]
fn test_empty_term_returns_everyone_in_order() {
    let members = demo_members();
    let filtered = filter_members(&members, "");
    assert_eq!(
        names(&filtered),
        vec!["Alex Morgan", "Sarah Johnson", "Michael Chen"]
    );
}

#[test]
fn test_name_match_is_case_insensitive() {
    let members = demo_members();
    assert_eq!(names(&filter_members(&members, "sarah")), vec!["Sarah Johnson"]);
    assert_eq!(names(&filter_members(&members, "SARAH")), vec!["Sarah Johnson"]);
    assert_eq!(names(&filter_members(&members, "cHeN")), vec!["Michael Chen"]);
}

#[test]
fn test_email_match() {
    let members = demo_members();
    assert_eq!(filter_members(&members, "example.com").len(), 3);
    assert_eq!(
        names(&filter_members(&members, "alex@")),
        vec!["Alex Morgan"]
    );
}

#[test]
fn test_no_match_is_empty() {
    let members = demo_members();
    assert!(filter_members(&members, "zzz").is_empty());
}

#[test]
fn test_filter_agrees_with_member_matches() {
    let members = demo_members();
    for term in ["", "a", "MI", "johnson", "@", ".com", "nobody", " "] {
        let expected: Vec<&GroupMember> =
            members.iter().filter(|m| m.matches(term)).collect();
        assert_eq!(filter_members(&members, term), expected, "term {term:?}");
    }
}

#[test]
fn test_matches_checks_name_and_email_only() {
    let members = demo_members();
    // "Admin" is Alex's role, not part of any name or email
    assert!(filter_members(&members, "admin").is_empty());
    assert!(filter_members(&members, "2023").is_empty());
}

#[test]
fn test_admins_are_not_manageable() {
    assert!(!Role::Admin.is_manageable());
    assert!(Role::Moderator.is_manageable());
    assert!(Role::Member.is_manageable());
}

#[test]
fn test_role_display_and_wire_form() {
    assert_eq!(Role::Moderator.to_string(), "Moderator");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""Admin""#);
    let role: Role = serde_json::from_str(r#""Member""#).unwrap();
    assert_eq!(role, Role::Member);
}

#[test]
fn test_member_deserializes_from_backend_json() {
    let member: GroupMember = serde_json::from_str(
        r#"{
            "name": "Dana Ortiz",
            "email": "dana@example.org",
            "role": "Moderator",
            "joined": "Apr 1, 2024",
            "memories": 0,
            "avatar_url": "https://i.pravatar.cc/40?img=9"
        }"#,
    )
    .unwrap();
    assert_eq!(member.role, Role::Moderator);
    assert!(member.matches("ORTIZ"));
}
