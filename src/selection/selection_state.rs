use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use uuid::Uuid;

use crate::option::SelectableOption;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

type SelectionCallback<O> = Rc<RefCell<dyn FnMut(Option<O>)>>;

struct Subscriber<O> {
    id: SubscriptionId,
    callback: SelectionCallback<O>
}

struct SelectionData<O: SelectableOption> {
    options: Vec<O>,
    selection: Option<O>,
    subscribers: Vec<Subscriber<O>>
}

/*
    The options of a checkbox list and the one (or none) that is currently chosen.
    Cloning gives another handle onto the same state, which is how rows share it with their list.
 */
pub struct SelectionState<O: SelectableOption> {
    data: Rc<RefCell<SelectionData<O>>>
}

impl<O: SelectableOption> Clone for SelectionState<O> {
    fn clone(&self) -> Self {
        SelectionState { data: Rc::clone(&self.data) }
    }
}

impl<O: SelectableOption> SelectionState<O> {
    pub fn new(initial_selection: Option<O>) -> SelectionState<O> {
        let data = SelectionData { options: O::all(), selection: initial_selection, subscribers: Vec::new() };
        SelectionState { data: Rc::new(RefCell::new(data)) }
    }

    pub fn get_selection(&self) -> Option<O> {
        self.data.borrow().selection
    }

    pub fn is_selected(&self, option: O) -> bool {
        self.get_selection() == Some(option)
    }

    /*
        Always replaces the selection and notifies every subscriber, even if the value hasn't changed.
        Callbacks run after the state is released, so they're free to read it.
     */
    pub fn set_selection(&self, option: O) {
        let callbacks: Vec<SelectionCallback<O>> = {
            let mut data = self.data.borrow_mut();
            data.selection = Some(option);
            data.subscribers.iter().map(|s| Rc::clone(&s.callback)).collect()
        };

        debug!("Selection set to {:?}, notifying {} subscriber(s)", option, callbacks.len());
        for callback in callbacks {
            (callback.borrow_mut())(Some(option));
        }
    }

    pub fn get_options(&self) -> Vec<O> {
        self.data.borrow().options.clone()
    }

    pub fn option_count(&self) -> usize {
        self.data.borrow().options.len()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId where F: FnMut(Option<O>) + 'static {
        let id = SubscriptionId(Uuid::new_v4());
        let callback: SelectionCallback<O> = Rc::new(RefCell::new(callback));
        self.data.borrow_mut().subscribers.push(Subscriber { id, callback });
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut data = self.data.borrow_mut();
        let before = data.subscribers.len();
        data.subscribers.retain(|s| s.id != id);
        data.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.data.borrow().subscribers.len()
    }
}
