//! Property tests for the mailbox store.
//!
//! Each case starts from the demonstration mailbox and picks emails by index.

#![allow(clippy::unwrap_used)]

use mailbox_core::store::in_folder;
use mailbox_core::{EmailId, Folder, Mailbox, MemoryMailbox, NewEmail, SearchQuery};
use proptest::prelude::*;

fn folder() -> impl Strategy<Value = Folder> {
    prop_oneof![
        Just(Folder::Inbox),
        Just(Folder::Sent),
        Just(Folder::Drafts),
        Just(Folder::Trash),
        Just(Folder::Spam),
        Just(Folder::Archive),
    ]
}

fn new_email() -> impl Strategy<Value = NewEmail> {
    (
        "[a-z]{1,8}@example\\.com",
        "[a-z]{1,8}@example\\.com",
        "[A-Za-z ]{0,24}",
        "[A-Za-z <>/]{0,48}",
        any::<bool>(),
        any::<bool>(),
        folder(),
    )
        .prop_map(|(from, to, subject, body, read, starred, folder)| NewEmail {
            read,
            starred,
            ..NewEmail::new(from, to, subject, body, folder)
        })
}

fn id_at(mailbox: &MemoryMailbox, index: usize) -> EmailId {
    let emails = mailbox.emails();
    emails[index % emails.len()].id.clone()
}

fn ids(mailbox: &MemoryMailbox) -> Vec<EmailId> {
    mailbox.emails().iter().map(|email| email.id.clone()).collect()
}

proptest! {
    #[test]
    fn add_email_prepends_one_record(draft in new_email()) {
        let mut mailbox = MemoryMailbox::with_sample_data();
        let before = ids(&mailbox);

        let id = mailbox.add_email(draft.clone());

        prop_assert!(!before.contains(&id));
        prop_assert_eq!(mailbox.emails().len(), before.len() + 1);
        prop_assert_eq!(mailbox.emails().iter().filter(|e| e.id == id).count(), 1);

        let added = &mailbox.emails()[0];
        prop_assert_eq!(&added.id, &id);
        prop_assert_eq!(&added.from, &draft.from);
        prop_assert_eq!(&added.to, &draft.to);
        prop_assert_eq!(&added.subject, &draft.subject);
        prop_assert_eq!(&added.body, &draft.body);
        prop_assert_eq!(added.read, draft.read);
        prop_assert_eq!(added.starred, draft.starred);
        prop_assert_eq!(added.folder, draft.folder);
        let after = ids(&mailbox);
        prop_assert_eq!(&after[1..], before.as_slice());
    }

    #[test]
    fn toggle_starred_twice_restores(index in any::<usize>()) {
        let mut mailbox = MemoryMailbox::with_sample_data();
        let id = id_at(&mailbox, index);
        let original = mailbox.email(&id).unwrap().starred;

        mailbox.toggle_starred(&id);
        prop_assert_eq!(mailbox.email(&id).unwrap().starred, !original);
        mailbox.toggle_starred(&id);
        prop_assert_eq!(mailbox.email(&id).unwrap().starred, original);
    }

    #[test]
    fn move_to_trash_changes_views(index in any::<usize>()) {
        let mut mailbox = MemoryMailbox::with_sample_data();
        let id = id_at(&mailbox, index);
        let original = mailbox.email(&id).unwrap().folder;

        mailbox.move_to_folder(&id, Folder::Trash);

        let trash = in_folder(mailbox.emails(), Folder::Trash);
        prop_assert!(trash.iter().any(|e| e.id == id));
        if original != Folder::Trash {
            let old_view = in_folder(mailbox.emails(), original);
            prop_assert!(old_view.iter().all(|e| e.id != id));
        }
        prop_assert!(mailbox.selected_email().is_none());
    }

    #[test]
    fn delete_removes_exactly_one(index in any::<usize>(), selected in any::<usize>()) {
        let mut mailbox = MemoryMailbox::with_sample_data();
        let id = id_at(&mailbox, index);
        mailbox.set_selected_email(Some(id_at(&mailbox, selected)));
        let expected: Vec<EmailId> = ids(&mailbox).into_iter().filter(|i| i != &id).collect();

        mailbox.delete_email(&id);

        prop_assert_eq!(ids(&mailbox), expected);
        prop_assert!(mailbox.selected_email().is_none());
    }

    #[test]
    fn search_finds_lowercased_subject_fragment(
        index in any::<usize>(),
        start in any::<usize>(),
        len in 1usize..12,
    ) {
        let mailbox = MemoryMailbox::with_sample_data();
        let id = id_at(&mailbox, index);
        let subject: Vec<char> = mailbox.email(&id).unwrap().subject.chars().collect();
        prop_assume!(!subject.is_empty());

        let start = start % subject.len();
        let end = (start + len).min(subject.len());
        let fragment: String = subject[start..end].iter().collect::<String>().to_lowercase();

        let hits = SearchQuery::new(&fragment).filter(mailbox.emails());
        prop_assert!(hits.iter().any(|e| e.id == id));
    }

    #[test]
    fn add_then_remove_label_restores(index in any::<usize>(), label in "[A-Za-z]{1,12}") {
        let mut mailbox = MemoryMailbox::with_sample_data();
        let id = id_at(&mailbox, index);
        prop_assume!(!mailbox.email(&id).unwrap().has_label(&label));
        let before = mailbox.email(&id).unwrap().label_list().to_vec();

        mailbox.add_label(&id, &label);
        prop_assert!(mailbox.email(&id).unwrap().has_label(&label));
        mailbox.remove_label(&id, &label);

        prop_assert_eq!(mailbox.email(&id).unwrap().label_list(), before.as_slice());
    }

    #[test]
    fn set_selected_folder_clears_selection(index in any::<usize>(), target in folder()) {
        let mut mailbox = MemoryMailbox::with_sample_data();
        mailbox.set_selected_email(Some(id_at(&mailbox, index)));

        mailbox.set_selected_folder(target);

        prop_assert_eq!(mailbox.selected_folder(), target);
        prop_assert!(mailbox.selected_email().is_none());
    }
}
