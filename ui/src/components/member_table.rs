use payloads::GroupMember;
use yew::prelude::*;

use super::RoleBadge;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Rows to show, already filtered.
    pub members: Vec<GroupMember>,
}

/// Members table. An empty list renders headers over an empty body.
#[function_component]
pub fn MemberTable(props: &Props) -> Html {
    html! {
        <table class="w-full text-sm">
            <thead>
                <tr class="text-left text-gray-600 border-b border-gray-200">
                    <th class="py-2">{"Member"}</th>
                    <th>{"Role"}</th>
                    <th>{"Joined"}</th>
                    <th>{"Memories"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                {props.members.iter().enumerate().map(|(index, member)| {
                    // Names and emails aren't guaranteed unique
                    html! {
                        <MemberRow key={index} member={member.clone()} />
                    }
                }).collect::<Html>()}
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
struct MemberRowProps {
    member: GroupMember,
}

#[function_component]
fn MemberRow(props: &MemberRowProps) -> Html {
    let member = &props.member;

    html! {
        <tr class="border-b border-gray-100 hover:bg-gray-50">
            <td class="py-2">
                <div class="flex items-center gap-3">
                    <img
                        src={member.avatar_url.clone()}
                        alt={member.name.clone()}
                        class="w-10 h-10 rounded-full"
                    />
                    <div>
                        <p class="font-medium">{&member.name}</p>
                        <p class="text-xs text-gray-500">{&member.email}</p>
                    </div>
                </div>
            </td>
            <td><RoleBadge role={member.role} /></td>
            <td>{&member.joined}</td>
            <td>{member.memories}</td>
            <td class="space-x-2">
                if member.role.is_manageable() {
                    <>
                        <button
                            type="button"
                            title="Edit member"
                            class="text-blue-600 hover:text-blue-800"
                        >
                            {"Edit"}
                        </button>
                        <button
                            type="button"
                            title="Remove member"
                            class="text-red-600 hover:text-red-800"
                        >
                            {"Remove"}
                        </button>
                    </>
                }
            </td>
        </tr>
    }
}
