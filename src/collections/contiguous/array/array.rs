use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::{AllocFailure, CapacityOverflow, ReserveError};
use crate::util::result::ReserveResultExtension;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// Array is the only type in this crate which talks to the global allocator directly. Every other
/// buffer (the slots of a [`Vector`](super::super::Vector) or the parallel marker, key and value
/// buffers of a [`HashMap`](crate::collections::hash::HashMap)) is an Array, usually of
/// [`MaybeUninit<T>`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `realloc_with_default` | `O(n)` |
///
/// \* Reallocation is delegated to [`alloc::realloc`], which may be able to grow in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3].into_iter());
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`]. Allocation failures are passed to
    /// [`alloc::handle_alloc_error`].
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let arr: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// assert_eq!(arr.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).or_handle_alloc()
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`, returning an error
    /// rather than panicking if the memory can't be allocated.
    ///
    /// # Errors
    /// Returns [`ReserveError::CapacityOverflow`] if the memory layout size would exceed
    /// [`isize::MAX`] and [`ReserveError::AllocFailure`] if the allocator returns null.
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, ReserveError> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size)?;
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout)?;

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`. This method acts as a counterpart to
    /// [`Array::assume_init`] and allows [`Array::realloc`] to be called on a previously
    /// initialized Array.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::from([1_u8, 2, 3].into_iter());
    /// let mut new_arr = arr.forget_init();
    ///
    /// new_arr.realloc(4);
    /// new_arr[3] = MaybeUninit::new(4);
    ///
    /// // SAFETY: All values in new_arr are now initialized.
    /// arr = unsafe { new_arr.assume_init() };
    ///
    /// assert_eq!(&*arr, &[1, 2, 3, 4]);
    /// ```
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = (self.ptr, self.size);
        mem::forget(self);
        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }
}

impl<T> Array<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// Returns [`AllocFailure`] if the allocator returns null.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<T>, AllocFailure> {
        if layout.size() == 0 {
            Ok(NonNull::dangling())
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).ok_or(AllocFailure { layout })
        }
    }

    /// Creates a second Array referring to the same allocation.
    ///
    /// # Safety
    /// The caller must ensure that at most one of the two Arrays is ever dropped or reallocated,
    /// and that self isn't used while the clone is in use.
    pub(crate) const unsafe fn clone_shallow(&mut self) -> Array<T> {
        Array {
            ptr: self.ptr,
            size: self.size,
            _phantom: PhantomData,
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: size > isize::MAX / size_of::<T>() is already guarded against and all
            // possible values are within the allocated range of the Array.
            unsafe {
                arr.ptr.add(i).write(MaybeUninit::new(T::default()))
            }
        }

        // SAFETY: All values are initialized with the default value for T.
        unsafe { arr.assume_init() }
    }

    /// Reallocate self with `new_size`, filling any extra elements with the default value of `T`.
    /// Elements below the old size keep their values. Shrinking drops the removed elements.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    pub fn realloc_with_default(&mut self, new_size: usize) {
        self.try_realloc_with_default(new_size).or_handle_alloc()
    }

    /// A version of [`Array::realloc_with_default`] that returns an error rather than panicking.
    /// If an error is returned, self keeps its old size. A failed shrink leaves default values in
    /// place of the elements it already dropped.
    ///
    /// # Errors
    /// Returns [`ReserveError::CapacityOverflow`] if the memory layout size would exceed
    /// [`isize::MAX`] and [`ReserveError::AllocFailure`] if the allocator returns null.
    pub fn try_realloc_with_default(&mut self, new_size: usize) -> Result<(), ReserveError> {
        let old_size = self.size;

        // Validate before dropping anything, so that an error leaves self untouched.
        Array::<MaybeUninit<T>>::make_layout(new_size)?;

        for i in new_size..old_size {
            // SAFETY: i < size, so the element is in bounds, initialized and is about to be
            // deallocated without being read again.
            unsafe { ptr::drop_in_place(self.ptr.add(i).as_ptr()); }
        }

        // SAFETY: We use a shallow clone here to allow us to change the type of the Array without
        // moving it out from behind a mutable reference. Neither of the Arrays are dropped and self
        // isn't used for the entire lifetime of the clone, except to access the original size.
        let mut wip_arr = unsafe { self.clone_shallow().forget_init() };
        if let Err(error) = wip_arr.try_realloc(new_size) {
            // The layout was validated above, so this is an allocator failure and the old
            // allocation is untouched. Refill anything dropped while shrinking so that self stays
            // fully initialized.
            mem::forget(wip_arr);
            for i in new_size..old_size {
                // SAFETY: i < size, so the write is within the allocated range of the Array. The
                // previous value has already been dropped.
                unsafe { self.ptr.add(i).write(T::default()) }
            }
            return Err(error);
        }

        for i in old_size..wip_arr.size {
            // SAFETY: size > isize::MAX / size_of::<T>() is already guarded against and all
            // possible values are within the allocated range of the Array.
            unsafe {
                wip_arr.ptr.add(i).write(MaybeUninit::new(T::default()))
            }
        }

        // Forget the old value to prevent a double free.
        mem::forget(mem::replace(
            self,
            // SAFETY: wip_arr is now initialized with the old values followed by the default value
            // for T.
            unsafe { wip_arr.assume_init() }
        ));
        Ok(())
    }
}

impl<T, I> From<I> for Array<T>
where
    I: Iterator<Item = T> + ExactSizeIterator,
{
    /// Creates an Array from an [`ExactSizeIterator`].
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`], or if the iterator yields a different
    /// number of items than it reported.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3].into_iter());
    /// assert_eq!(&*arr, [1, 2, 3]);
    /// ```
    fn from(iter: I) -> Self {
        let size = iter.len();
        let arr = Self::new_uninit(size);
        let mut written = 0;

        for item in iter.take(size) {
            // SAFETY: written < size, so the write is within the allocated range of the Array.
            unsafe {
                arr.ptr.add(written).write(MaybeUninit::new(item))
            }
            written += 1;
        }

        assert_eq!(written, size, "ExactSizeIterator reported an incorrect length!");

        // SAFETY: All values are initialized.
        unsafe { arr.assume_init() }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = (self.ptr, self.size);
        mem::forget(self);
        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }

    /// Reallocate the Array to have size equal to `new_size`, with new locations uninitialized.
    /// Values below both sizes are preserved. Values at or above `new_size` aren't dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`) Allocation failures are passed to
    /// [`alloc::handle_alloc_error`].
    pub fn realloc(&mut self, new_size: usize) {
        self.try_realloc(new_size).or_handle_alloc()
    }

    /// A version of [`Array::realloc`] that returns an error rather than panicking. If an error
    /// is returned, self is left unchanged.
    ///
    /// # Errors
    /// Returns [`ReserveError::CapacityOverflow`] if the memory layout size would exceed
    /// [`isize::MAX`] and [`ReserveError::AllocFailure`] if the allocator returns null.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), ReserveError> {
        let new_layout = Self::make_layout(new_size)?;

        let new_ptr = match (self.size, new_size) {
            (old, new) if old == new => {
                // The sizes are equal, there is no need to reallocate.
                return Ok(());
            },
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types are never allocated, the existing dangling pointer is kept and
                // only the size changes.
                self.ptr
            },
            (0, _) => {
                // If the Array previously had a size of zero, we need a new allocation.
                Self::make_ptr(new_layout)?
            },
            (_, 0) => {
                // The old allocation isn't needed anymore.
                let old_layout = Self::make_layout(self.size)?;

                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size because both a zero size and zero-sized types are guarded against.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }

                NonNull::dangling()
            },
            (_, _) => {
                // Otherwise, use realloc to handle moving or in-place size changing.
                let old_layout = Self::make_layout(self.size)?;

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        old_layout,
                        new_layout.size()
                    ).cast()
                };

                // A null from realloc leaves the old allocation untouched.
                NonNull::new(raw_ptr).ok_or(AllocFailure { layout: new_layout })?
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        for i in 0..self.size {
            // SAFETY: The pointer is nonnull, as well as properly aligned, initialized and
            // ready to drop. count > isize::MAX / size_of::<T>() is already guarded against and
            // all possible values are within the allocated range of the Array.
            unsafe {
                ptr::drop_in_place(self.ptr.add(i).as_ptr());
            }
        }

        let Ok(layout) = Array::<T>::make_layout(self.size) else { return };

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow of self prevents any other access
        // throughout 'a.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
