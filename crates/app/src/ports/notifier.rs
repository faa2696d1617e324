//! Notifier port: surfaces a message to the user.

use std::rc::Rc;

/// Shows a blocking message to the user (a browser `alert` in production).
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}
