pub mod contacts_view;
